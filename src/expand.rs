//! CSS-style directional expansion of shorthand values.
//!
//! One to four positional values map onto per-edge or per-corner properties
//! following the CSS convention: one value covers everything, two split
//! top/bottom from right/left, three give top, sides, bottom, and four name
//! each direction clockwise from the top (or top-left).

use crate::compiler::StyleCompiler;
use crate::error::CompileError;
use crate::value::StyleRecord;

/// Which direction family a shorthand expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directions {
    /// Top / Right / Bottom / Left (margin, padding, border-width).
    Edges,
    /// TopLeft / TopRight / BottomRight / BottomLeft (border-radius).
    Corners,
}

// Rows indexed by value count - 1; each row maps one value slot to the
// direction names it populates.
const EDGE_ROWS: [&[&[&str]]; 4] = [
    &[&["Top", "Right", "Bottom", "Left"]],
    &[&["Top", "Bottom"], &["Right", "Left"]],
    &[&["Top"], &["Right", "Left"], &["Bottom"]],
    &[&["Top"], &["Right"], &["Bottom"], &["Left"]],
];

const CORNER_ROWS: [&[&[&str]]; 4] = [
    &[&["TopLeft", "TopRight", "BottomRight", "BottomLeft"]],
    &[&["TopLeft", "BottomRight"], &["TopRight", "BottomLeft"]],
    &[&["TopLeft"], &["TopRight", "BottomLeft"], &["BottomRight"]],
    &[&["TopLeft"], &["TopRight"], &["BottomRight"], &["BottomLeft"]],
];

/// Expands positional `args` into per-direction properties named
/// `<prefix><Direction><suffix>`, resolving each value independently.
///
/// Empty value slots (from doubled spaces in the source) are skipped — no
/// key is written for the directions they would have populated.
///
/// # Errors
///
/// Returns [`CompileError::InvalidArity`] when `args` has fewer than one or
/// more than four entries.
pub fn expand_sides(
    compiler: &StyleCompiler,
    prefix: &str,
    suffix: &str,
    directions: Directions,
    args: &[&str],
) -> Result<StyleRecord, CompileError> {
    if args.is_empty() || args.len() > 4 {
        return Err(CompileError::InvalidArity {
            property: format!("{}{}", prefix, suffix),
            count: args.len(),
        });
    }

    let rows = match directions {
        Directions::Edges => &EDGE_ROWS,
        Directions::Corners => &CORNER_ROWS,
    };
    let row = rows[args.len() - 1];

    let mut record = StyleRecord::new();
    for (arg, group) in args.iter().zip(row) {
        if arg.is_empty() {
            continue;
        }
        let value = compiler.resolve_token(arg);
        for direction in *group {
            record.insert(format!("{}{}{}", prefix, direction, suffix), value.clone());
        }
    }
    Ok(record)
}

pub(crate) fn expand_margin(
    compiler: &mut StyleCompiler,
    args: &[&str],
) -> Result<StyleRecord, CompileError> {
    expand_sides(compiler, "margin", "", Directions::Edges, args)
}

pub(crate) fn expand_padding(
    compiler: &mut StyleCompiler,
    args: &[&str],
) -> Result<StyleRecord, CompileError> {
    expand_sides(compiler, "padding", "", Directions::Edges, args)
}

pub(crate) fn expand_border_width(
    compiler: &mut StyleCompiler,
    args: &[&str],
) -> Result<StyleRecord, CompileError> {
    expand_sides(compiler, "border", "Width", Directions::Edges, args)
}

pub(crate) fn expand_border_radius(
    compiler: &mut StyleCompiler,
    args: &[&str],
) -> Result<StyleRecord, CompileError> {
    expand_sides(compiler, "border", "Radius", Directions::Corners, args)
}

/// Composite `border` shorthand: width, style, color. Re-expands through the
/// compile pipeline, so the width goes through the directional path while
/// style and color assign normally.
pub(crate) fn expand_border(
    compiler: &mut StyleCompiler,
    args: &[&str],
) -> Result<StyleRecord, CompileError> {
    let width = args.first().copied().unwrap_or("");
    let style = args.get(1).copied().unwrap_or("");
    let color = args.get(2).copied().unwrap_or("");
    let source = format!(
        "borderWidth {}; borderStyle {}; borderColor {}",
        width, style, color
    );
    let record = compiler.compile(&source)?;
    Ok((*record).clone())
}
