//! # Ecodeck CLI
//!
//! Terminal frontend for the deck quote engine. Plays the configurator
//! role: collects a `DeckConfig` (flooring invalid numeric input at the
//! minimum valid dimensions before the engine ever sees it), prints the
//! quote, and optionally exports it as a text file or PDF.

use std::io::{self, BufRead, Write};

use deck_core::config::{
    DeckConfig, DeckShape, Dimensions, EdgeSelection, EdgeType, WoodColor, WoodFinish,
};
use deck_core::materials::compute_materials;
use deck_core::pdf::render_quote_pdf;
use deck_core::pricing::{compute_prices, format_price};
use deck_core::report::{quote_filename, render_quote};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    match prompt_line(prompt).to_lowercase().as_str() {
        "o" | "oui" | "y" | "yes" => true,
        "n" | "non" | "no" => false,
        _ => default,
    }
}

fn prompt_shape() -> DeckShape {
    match prompt_line("Forme (1=rectangulaire, 2=L, 3=U) [1]: ").as_str() {
        "2" => DeckShape::LShaped,
        "3" => DeckShape::UShaped,
        _ => DeckShape::Rectangular,
    }
}

fn prompt_color() -> WoodColor {
    match prompt_line("Couleur (1=gris, 2=acajou, 3=chêne, 4=marron) [3]: ").as_str() {
        "1" => WoodColor::Gris,
        "2" => WoodColor::Acajou,
        "4" => WoodColor::Marron,
        _ => WoodColor::Chene,
    }
}

fn prompt_finish() -> WoodFinish {
    match prompt_line("Finition (1=brossée, 2=structurée, 3=poncée) [1]: ").as_str() {
        "2" => WoodFinish::Structuree,
        "3" => WoodFinish::Poncee,
        _ => WoodFinish::Brossee,
    }
}

fn prompt_config() -> DeckConfig {
    let shape = prompt_shape();

    let width = prompt_f64("Largeur (m) [4.0]: ", 4.0);
    let height = prompt_f64("Longueur (m) [3.0]: ", 3.0);

    let dimensions = if shape.has_extension() {
        let ext_w = prompt_f64("Extension largeur (m) [2.0]: ", 2.0);
        let ext_h = prompt_f64("Extension longueur (m) [2.0]: ", 2.0);
        Dimensions::with_extension(width, height, ext_w, ext_h)
    } else {
        Dimensions::new(width, height)
    };

    let color = prompt_color();
    let finish = prompt_finish();

    let include_edges = prompt_bool("Inclure les bordures? (o/n) [o]: ", true);
    let (edge_type, edge_selection) = if include_edges {
        let edge_type = match prompt_line("Type de bordure (1=cornières, 2=plinthes) [1]: ").as_str()
        {
            "2" => EdgeType::Plinthes,
            _ => EdgeType::Cornieres,
        };
        let selection = if prompt_bool("Border les quatre côtés? (o/n) [o]: ", true) {
            EdgeSelection::all()
        } else {
            EdgeSelection {
                top: prompt_bool("  Côté haut? (o/n) [o]: ", true),
                bottom: prompt_bool("  Côté bas? (o/n) [o]: ", true),
                left: prompt_bool("  Côté gauche? (o/n) [o]: ", true),
                right: prompt_bool("  Côté droit? (o/n) [o]: ", true),
            }
        };
        (edge_type, Some(selection))
    } else {
        (EdgeType::default(), None)
    };

    DeckConfig {
        shape,
        // Floor out-of-range input before it reaches the engine
        dimensions: dimensions.sanitized(),
        color,
        finish,
        edge_type,
        include_edges,
        edge_selection,
    }
}

fn main() {
    println!("Ecodeck - Configurateur de terrasse en bois composite");
    println!("=====================================================");
    println!();

    let config = prompt_config();

    println!();
    println!("{}", render_quote(&config));

    let materials = compute_materials(&config);
    let prices = compute_prices(&materials, &config);
    println!(
        "Résumé: {:.2} m² - {} clips - {}",
        materials.area,
        materials.clip_count(),
        format_price(prices.total)
    );
    println!();

    match prompt_line("Exporter le devis? (t=texte, p=PDF, n=non) [n]: ").as_str() {
        "t" => {
            let path = quote_filename("txt");
            match std::fs::write(&path, render_quote(&config)) {
                Ok(()) => println!("Devis écrit: {path}"),
                Err(e) => eprintln!("Échec de l'export: {e}"),
            }
        }
        "p" => {
            let path = quote_filename("pdf");
            match render_quote_pdf(&config).and_then(|bytes| {
                std::fs::write(&path, bytes).map_err(|e| {
                    deck_core::DeckError::file_error("write", path.as_str(), e.to_string())
                })
            }) {
                Ok(()) => println!("Devis écrit: {path}"),
                Err(e) => {
                    eprintln!("Échec de l'export: {e}");
                    if let Ok(json) = serde_json::to_string_pretty(&e) {
                        eprintln!("{json}");
                    }
                }
            }
        }
        _ => {}
    }

    println!();
    println!("JSON (pour intégration):");
    if let Ok(json) = serde_json::to_string_pretty(&prices) {
        println!("{}", json);
    }
}
