//! # Quote Report
//!
//! Deterministic plain-text serialization of a priced deck
//! configuration. The same config always produces byte-identical text,
//! modulo the generation-date line; the export filename carries a
//! timestamp so successive exports never collide.
//!
//! Field content and ordering are fixed: title, date, configuration
//! echo, area/perimeter, material quantities, price lines, total,
//! technical notes.

use chrono::{DateTime, Utc};

use crate::config::DeckConfig;
use crate::joists::compute_joist_layout;
use crate::materials::{
    compute_materials, CLIPS_PER_M2, LAMBOURDES_PER_M2, LAMES_PER_M2,
};
use crate::pricing::{compute_prices, format_price};

/// Render the quote as plain text, dated now.
pub fn render_quote(config: &DeckConfig) -> String {
    render_quote_at(config, Utc::now())
}

/// Render the quote as plain text with an explicit generation date.
///
/// Split out so callers (and tests) can pin the only non-deterministic
/// line.
pub fn render_quote_at(config: &DeckConfig, date: DateTime<Utc>) -> String {
    let materials = compute_materials(config);
    let prices = compute_prices(&materials, config);
    let joists = compute_joist_layout(config);

    let mut out = String::new();

    out.push_str("DEVIS TERRASSE EN BOIS COMPOSITE\n");
    out.push_str("================================\n\n");
    out.push_str(&format!("Date: {}\n\n", date.format("%Y-%m-%d")));

    out.push_str("Configuration:\n");
    out.push_str(&format!("- Forme: {}\n", config.shape.display_name()));
    out.push_str(&format!(
        "- Dimensions: {}m × {}m\n",
        config.dimensions.width, config.dimensions.height
    ));
    if config.shape.has_extension() {
        out.push_str(&format!(
            "- Extension: {}m × {}m\n",
            config.dimensions.ext_width(),
            config.dimensions.ext_height()
        ));
    }
    out.push_str(&format!("- Couleur: {}\n", config.color.display_name()));
    out.push_str(&format!("- Finition: {}\n", config.finish.display_name()));
    if config.include_edges {
        out.push_str(&format!(
            "- Côtés bordés: {}\n",
            config.effective_edge_selection().selected_names().join(", ")
        ));
    }
    out.push_str(&format!("- Surface totale: {:.2} m²\n", materials.area));
    out.push_str(&format!("- Périmètre: {:.2} m\n\n", materials.perimeter));

    out.push_str("Matériaux nécessaires:\n");
    out.push_str(&format!("- Lames: {:.2} m\n", materials.lames));
    out.push_str(&format!("- Lambourdes: {:.2} m\n", materials.lambourdes));
    out.push_str(&format!(
        "- Clips de fixation: {} unités\n",
        materials.clip_count()
    ));
    if config.include_edges {
        out.push_str(&format!(
            "- {}: {:.2} m\n",
            config.edge_type.display_name(),
            materials.edges
        ));
    }
    out.push('\n');

    out.push_str("Prix détaillé:\n");
    out.push_str(&format!("- Lames: {}\n", format_price(prices.lames)));
    out.push_str(&format!("- Lambourdes: {}\n", format_price(prices.lambourdes)));
    out.push_str(&format!("- Clips: {}\n", format_price(prices.clips)));
    if config.include_edges {
        out.push_str(&format!(
            "- {}: {}\n",
            config.edge_type.display_name(),
            format_price(prices.edges)
        ));
    }
    out.push('\n');

    out.push_str(&format!("TOTAL: {}\n\n", format_price(prices.total)));

    out.push_str("Informations techniques:\n");
    out.push_str(&format!(
        "- Lambourdes espacées de 50 cm ({} lignes au total)\n",
        joists.total_lines()
    ));
    out.push_str("- Lames posées perpendiculairement sur les lambourdes\n");
    out.push_str(&format!(
        "- Consommation par m²: {LAMES_PER_M2}m de lames, {LAMBOURDES_PER_M2}m de lambourdes, {CLIPS_PER_M2} clips\n"
    ));

    out
}

/// Timestamped export filename, e.g. `devis-terrasse-1735689600000.txt`.
pub fn quote_filename(extension: &str) -> String {
    format!(
        "devis-terrasse-{}.{extension}",
        Utc::now().timestamp_millis()
    )
}
