// SVG views of digest results: a linear restriction map of the
// reconstructed cleavage sites, and a gel-style lane of the input
// fragment multiset with log-scale band placement.

use crate::partial_digest::DigestSolution;
use itertools::Itertools;
use std::collections::BTreeMap;
use svg::node::element::{Line, Rectangle, Text};
use svg::Document;

const SVG_WIDTH: f32 = 900.0;
const MAP_HEIGHT: f32 = 220.0;
const MAP_LEFT: f32 = 60.0;
const MAP_RIGHT: f32 = SVG_WIDTH - 60.0;
const MAP_BASELINE: f32 = 110.0;

const GEL_HEIGHT: f32 = 560.0;
const GEL_TOP: f32 = 60.0;
const GEL_BOTTOM: f32 = GEL_HEIGHT - 80.0;
const LANE_X: f32 = 220.0;
const LANE_HALF_WIDTH: f32 = 60.0;

fn x_for_coord(coord: u64, dna_length: u64) -> f32 {
    if dna_length == 0 {
        return MAP_LEFT;
    }
    MAP_LEFT + (coord as f64 / dna_length as f64) as f32 * (MAP_RIGHT - MAP_LEFT)
}

// Electrophoresis runs short fragments further, log-scaled; same
// placement model as a ladder lane.
fn y_for_bp(bp: u64, min_bp: u64, max_bp: u64, top: f32, bottom: f32) -> f32 {
    let min_bp = min_bp.max(1) as f64;
    let max_bp = (max_bp as f64).max(min_bp + 1.0);
    let bp = (bp as f64).clamp(min_bp, max_bp);
    let log_min = min_bp.log10();
    let log_max = max_bp.log10();
    let denom = (log_max - log_min).max(1e-6);
    let f = ((log_max - bp.log10()) / denom) as f32;
    top + f.clamp(0.0, 1.0) * (bottom - top)
}

/// Linear map of a reconstruction: baseline over `[0, dna_length]`, one
/// tick per cleavage site, and a caption listing any unexplained
/// fragments.
pub fn restriction_map_svg(solution: &DigestSolution) -> String {
    let mut doc = Document::new()
        .set("viewBox", (0, 0, SVG_WIDTH, MAP_HEIGHT))
        .set("width", SVG_WIDTH)
        .set("height", MAP_HEIGHT)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", SVG_WIDTH)
                .set("height", MAP_HEIGHT)
                .set("fill", "#f9fafb"),
        )
        .add(
            Text::new(format!(
                "Restriction map, {} bp, {} cleavage sites",
                solution.dna_length,
                solution.cleavage_sites.len()
            ))
            .set("x", MAP_LEFT)
            .set("y", 30.0)
            .set("font-family", "monospace")
            .set("font-size", 15)
            .set("fill", "#0f172a"),
        )
        .add(
            Line::new()
                .set("x1", MAP_LEFT)
                .set("y1", MAP_BASELINE)
                .set("x2", MAP_RIGHT)
                .set("y2", MAP_BASELINE)
                .set("stroke", "#111315")
                .set("stroke-width", 3),
        );

    for site in &solution.cleavage_sites {
        let x = x_for_coord(*site, solution.dna_length);
        doc = doc
            .add(
                Line::new()
                    .set("x1", x)
                    .set("y1", MAP_BASELINE - 16.0)
                    .set("x2", x)
                    .set("y2", MAP_BASELINE + 16.0)
                    .set("stroke", "#b45309")
                    .set("stroke-width", 2),
            )
            .add(
                Text::new(site.to_string())
                    .set("x", x)
                    .set("y", MAP_BASELINE + 36.0)
                    .set("text-anchor", "middle")
                    .set("font-family", "monospace")
                    .set("font-size", 12)
                    .set("fill", "#374151"),
            );
    }

    if !solution.leftover_fragments.is_empty() {
        let leftovers = solution
            .leftover_fragments
            .iter()
            .map(|bp| bp.to_string())
            .join(", ");
        doc = doc.add(
            Text::new(format!("Unexplained fragments: {leftovers}"))
                .set("x", MAP_LEFT)
                .set("y", MAP_HEIGHT - 24.0)
                .set("font-family", "monospace")
                .set("font-size", 12)
                .set("fill", "#b91c1c"),
        );
    }

    doc.to_string()
}

/// One gel lane for a fragment multiset. Bands with higher multiplicity
/// render wider and more opaque.
pub fn gel_svg(fragments: &[u64]) -> String {
    let mut by_bp: BTreeMap<u64, usize> = BTreeMap::new();
    for bp in fragments.iter().filter(|bp| **bp > 0) {
        *by_bp.entry(*bp).or_insert(0) += 1;
    }
    let min_bp = by_bp.keys().next().copied().unwrap_or(1);
    let max_bp = by_bp.keys().next_back().copied().unwrap_or(min_bp);

    let mut doc = Document::new()
        .set("viewBox", (0, 0, SVG_WIDTH, GEL_HEIGHT))
        .set("width", SVG_WIDTH)
        .set("height", GEL_HEIGHT)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", SVG_WIDTH)
                .set("height", GEL_HEIGHT)
                .set("fill", "#f9fafb"),
        )
        .add(
            Rectangle::new()
                .set("x", LANE_X - LANE_HALF_WIDTH)
                .set("y", GEL_TOP)
                .set("width", LANE_HALF_WIDTH * 2.0)
                .set("height", GEL_BOTTOM - GEL_TOP)
                .set("rx", 8)
                .set("ry", 8)
                .set("fill", "#111315"),
        )
        .add(
            Text::new(format!("Digest lane (n={})", fragments.len()))
                .set("x", LANE_X)
                .set("y", GEL_BOTTOM + 30.0)
                .set("text-anchor", "middle")
                .set("font-family", "monospace")
                .set("font-size", 13)
                .set("fill", "#0f172a"),
        );

    for (bp, count) in &by_bp {
        let y = y_for_bp(*bp, min_bp, max_bp, GEL_TOP + 16.0, GEL_BOTTOM - 16.0);
        let intensity = (0.42 + *count as f32 * 0.2).clamp(0.3, 1.0);
        let width = 58.0 + 36.0 * intensity;
        let mut label = format!("{bp} bp");
        if *count > 1 {
            label.push_str(&format!(" (x{count})"));
        }
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", LANE_X - width * 0.5)
                    .set("y", y - 3.0)
                    .set("width", width)
                    .set("height", 6.0)
                    .set("rx", 2)
                    .set("ry", 2)
                    .set("fill", "#e5e7eb")
                    .set("opacity", intensity),
            )
            .add(
                Text::new(label)
                    .set("x", LANE_X + LANE_HALF_WIDTH + 18.0)
                    .set("y", y + 4.0)
                    .set("font-family", "monospace")
                    .set("font-size", 11)
                    .set("fill", "#374151"),
            );
    }

    doc.to_string()
}
