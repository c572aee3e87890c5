//! # PDF Quote Export
//!
//! Generates a printable quote document from a deck configuration using
//! Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Quote data is injected via string formatting before compilation
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use deck_core::config::DeckConfig;
//! use deck_core::pdf::render_quote_pdf;
//!
//! let pdf_bytes = render_quote_pdf(&DeckConfig::default()).unwrap();
//! std::fs::write("devis.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::config::DeckConfig;
use crate::errors::{DeckError, DeckResult};
use crate::joists::compute_joist_layout;
use crate::materials::{compute_materials, CLIPS_PER_M2, LAMBOURDES_PER_M2, LAMES_PER_M2};
use crate::pricing::{compute_prices, format_price};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts (bundled typst-assets set)
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }
        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the deck quote document
const QUOTE_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2cm, bottom: 2cm, left: 2cm, right: 2cm),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 9pt)[Ecodeck]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 11pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Devis terrasse en bois composite]
    #v(4pt)
    #text(size: 12pt)[{{DATE}}]
  ]
]

#v(16pt)

== Configuration

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
{{CONFIG_ROWS}}
)

#v(12pt)

== Matériaux nécessaires

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
{{MATERIAL_ROWS}}
)

#v(12pt)

== Prix détaillé

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
{{PRICE_ROWS}}
  [*TOTAL*], [*{{TOTAL}}*],
)

#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

== Informations techniques

- Lambourdes espacées de 50 cm ({{JOIST_LINES}} lignes au total)
- Lames posées perpendiculairement sur les lambourdes
- Consommation par m²: {{LAMES_RATE}} m de lames, {{LAMBOURDES_RATE}} m de lambourdes, {{CLIPS_RATE}} clips

#v(24pt)
#text(size: 9pt, fill: gray)[
  Devis indicatif généré par Ecodeck. Les quantités sont des estimations
  à confirmer avant commande.
]
"##;

// ============================================================================
// PDF Rendering
// ============================================================================

/// Render the quote for one config snapshot to PDF bytes.
///
/// The document mirrors the plain-text quote content and ordering
/// (see [`crate::report`]). Compilation or encoding problems surface as
/// [`DeckError::RenderFailed`]; the config itself is untouched either way.
pub fn render_quote_pdf(config: &DeckConfig) -> DeckResult<Vec<u8>> {
    let materials = compute_materials(config);
    let prices = compute_prices(&materials, config);
    let joists = compute_joist_layout(config);

    let mut config_rows = vec![
        row("Forme", config.shape.display_name()),
        row(
            "Dimensions",
            &format!(
                "{} m × {} m",
                config.dimensions.width, config.dimensions.height
            ),
        ),
    ];
    if config.shape.has_extension() {
        config_rows.push(row(
            "Extension",
            &format!(
                "{} m × {} m",
                config.dimensions.ext_width(),
                config.dimensions.ext_height()
            ),
        ));
    }
    config_rows.push(row("Couleur", config.color.display_name()));
    config_rows.push(row("Finition", config.finish.display_name()));
    if config.include_edges {
        config_rows.push(row(
            "Côtés bordés",
            &config
                .effective_edge_selection()
                .selected_names()
                .join(", "),
        ));
    }
    config_rows.push(row("Surface totale", &format!("{:.2} m²", materials.area)));
    config_rows.push(row("Périmètre", &format!("{:.2} m", materials.perimeter)));

    let mut material_rows = vec![
        row("Lames", &format!("{:.2} m", materials.lames)),
        row("Lambourdes", &format!("{:.2} m", materials.lambourdes)),
        row(
            "Clips de fixation",
            &format!("{} unités", materials.clip_count()),
        ),
    ];
    let mut price_rows = vec![
        row("Lames", &format_price(prices.lames)),
        row("Lambourdes", &format_price(prices.lambourdes)),
        row("Clips", &format_price(prices.clips)),
    ];
    if config.include_edges {
        let trim = config.edge_type.display_name();
        material_rows.push(row(trim, &format!("{:.2} m", materials.edges)));
        price_rows.push(row(trim, &format_price(prices.edges)));
    }

    let source = QUOTE_TEMPLATE
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{CONFIG_ROWS}}", &config_rows.join("\n"))
        .replace("{{MATERIAL_ROWS}}", &material_rows.join("\n"))
        .replace("{{PRICE_ROWS}}", &price_rows.join("\n"))
        .replace("{{TOTAL}}", &escape_typst(&format_price(prices.total)))
        .replace("{{JOIST_LINES}}", &joists.total_lines().to_string())
        .replace("{{LAMES_RATE}}", &LAMES_PER_M2.to_string())
        .replace("{{LAMBOURDES_RATE}}", &LAMBOURDES_PER_M2.to_string())
        .replace("{{CLIPS_RATE}}", &CLIPS_PER_M2.to_string());

    // Compile the Typst document
    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        DeckError::render_failed("typst", error_msgs.join("; "))
    })?;

    // Render to PDF
    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        DeckError::render_failed("pdf", error_msgs.join("; "))
    })?;

    Ok(pdf_bytes)
}

/// One two-column Typst table row
fn row(label: &str, value: &str) -> String {
    format!("  [{}], [{}],", escape_typst(label), escape_typst(value))
}

/// Escape special Typst characters in injected text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
