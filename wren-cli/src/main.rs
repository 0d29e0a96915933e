//! Wren CLI
//!
//! Parses an HTML document and a stylesheet, lays the document out, and
//! prints the result.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use wren_browser::{Document, Viewport, load_document};
use wren_css::{BoxSnapshot, DisplayCommand, Dimensions, EdgeSizes, StyledNode};

/// Wren - lay out HTML with CSS and print the box tree
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Lay out a page with its stylesheet
    wren page.html --css page.css

    # Inline documents
    wren --html '<div><p></p></div>' --css-text 'div, p { display: block; }'

    # The box tree as JSON in a 1024px viewport
    wren page.html --css page.css --json --width 1024

LOGGING:
    RUST_LOG=debug wren page.html   # pipeline stages
    RUST_LOG=trace wren page.html   # one event per laid-out block
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse an HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Path to a CSS file
    #[arg(long, value_name = "FILE", conflicts_with = "css_text")]
    css: Option<PathBuf>,

    /// Parse a CSS string instead of a file
    #[arg(long, value_name = "CSS")]
    css_text: Option<String>,

    /// Print the parsed DOM tree
    #[arg(long)]
    dom: bool,

    /// Print the styled tree with each element's specified values
    #[arg(long)]
    styles: bool,

    /// Print the laid-out box tree as JSON instead of text
    #[arg(long, conflicts_with_all = ["dom", "styles", "display_list"])]
    json: bool,

    /// Print the display list
    #[arg(long)]
    display_list: bool,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let document = load_doc(&cli)?;
    let viewport = Viewport {
        width: cli.width,
        height: cli.height,
    };
    tracing::debug!(
        nodes = document.dom.subtree_len(),
        rules = document.stylesheet.rules.len(),
        width = viewport.width,
        "document ready"
    );
    let term = Term {
        color: !cli.no_color,
    };

    if cli.dom {
        term.heading("DOM Tree");
        print!("{}", document.dom);
        println!();
    }

    if cli.styles {
        term.heading("Styled Tree");
        print_styled_node(&term, &document.style_tree(), 0);
        println!();
    }

    if cli.display_list {
        term.heading("Display List");
        for command in document.display_list(viewport).commands() {
            print_command(&term, command);
        }
        println!();
    }

    let layout = document.layout(viewport);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        term.heading(&format!(
            "Layout Tree (viewport: {}x{})",
            viewport.width, viewport.height
        ));
        match layout {
            Some(root) => print_layout_box(&term, &root, 0),
            None => println!("No boxes generated (root is display: none)"),
        }
    }

    Ok(())
}

/// Load the document from CLI arguments
fn load_doc(cli: &Cli) -> anyhow::Result<Document> {
    if let (Some(path), None, None) = (&cli.path, &cli.html, &cli.css_text) {
        return Ok(load_document(path, cli.css.as_deref())?);
    }

    let html = match (&cli.html, &cli.path) {
        (Some(html), _) => html.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        (None, None) => bail!("an HTML file or --html is required"),
    };
    let css = match (&cli.css_text, &cli.css) {
        (Some(css), _) => css.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        (None, None) => String::new(),
    };
    Ok(Document::parse(&html, &css)?)
}

/// Terminal styling, switched off by `--no-color`.
struct Term {
    color: bool,
}

impl Term {
    fn heading(&self, title: &str) {
        let title = format!("=== {title} ===");
        if self.color {
            println!("{}", title.bold());
        } else {
            println!("{title}");
        }
    }

    fn name(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Recursively print a styled node with its specified values
fn print_styled_node(term: &Term, styled: &StyledNode<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    match styled.tag_name() {
        Some(tag) => println!("{indent}{}", term.name(&format!("<{tag}>"))),
        None => println!("{indent}{}", term.dim("#text")),
    }

    let mut properties: Vec<_> = styled.specified_values.iter().collect();
    properties.sort_unstable_by_key(|(name, _)| *name);
    for (name, value) in properties {
        println!("{indent}  {name}: {value}");
    }

    for child in &styled.children {
        print_styled_node(term, child, depth + 1);
    }
}

fn print_command(term: &Term, command: &DisplayCommand) {
    match command {
        DisplayCommand::SolidColor { color, rect } => println!(
            "{} {color} x={:.1} y={:.1} w={:.1} h={:.1}",
            term.name("SolidColor"),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        ),
    }
}

/// Recursively print a layout box with its dimensions
fn print_layout_box(term: &Term, layout_box: &BoxSnapshot, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = match &layout_box.tag {
        Some(tag) => format!("<{tag}>"),
        None if layout_box.kind == "anonymous" => "AnonymousBlock".to_string(),
        None => "#text".to_string(),
    };
    println!("{indent}[{}] {}", term.name(&name), term.dim(layout_box.kind));
    print_dimensions(term, &indent, &layout_box.dimensions);

    for child in &layout_box.children {
        print_layout_box(term, child, depth + 1);
    }
}

fn print_dimensions(term: &Term, indent: &str, dims: &Dimensions) {
    let c = dims.content;
    println!(
        "{indent}  {} x={:.1} y={:.1} w={:.1} h={:.1}",
        term.dim("content:"),
        c.x,
        c.y,
        c.width,
        c.height
    );
    print_edges(term, indent, "margin:", &dims.margin);
    print_edges(term, indent, "border:", &dims.border);
    print_edges(term, indent, "padding:", &dims.padding);
}

fn print_edges(term: &Term, indent: &str, label: &str, edges: &EdgeSizes) {
    if *edges == EdgeSizes::default() {
        return;
    }
    println!(
        "{indent}  {} t={:.1} r={:.1} b={:.1} l={:.1}",
        term.dim(label),
        edges.top,
        edges.right,
        edges.bottom,
        edges.left
    );
}
