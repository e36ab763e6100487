use crate::board::Board;

use shakmaty::{Color, File, Piece, Position, Rank, Role, Square};
use std::fmt::Write;

/// Default rendered width and height in pixels.
pub const BOARD_SIZE: u32 = 400;

const SQUARE: u32 = 45;
const MARGIN: u32 = 20;
const VIEWBOX: u32 = 8 * SQUARE + 2 * MARGIN;

const LIGHT: &str = "#ffce9e";
const DARK: &str = "#d18b47";
const LIGHT_LASTMOVE: &str = "#cdd16a";
const DARK_LASTMOVE: &str = "#aaa23b";
const CHECK: &str = "#ff0000";
const COORD: &str = "#e5e5e5";
const BORDER: &str = "#212121";

fn glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '\u{2654}',
        (Color::White, Role::Queen) => '\u{2655}',
        (Color::White, Role::Rook) => '\u{2656}',
        (Color::White, Role::Bishop) => '\u{2657}',
        (Color::White, Role::Knight) => '\u{2658}',
        (Color::White, Role::Pawn) => '\u{2659}',
        (Color::Black, Role::King) => '\u{265a}',
        (Color::Black, Role::Queen) => '\u{265b}',
        (Color::Black, Role::Rook) => '\u{265c}',
        (Color::Black, Role::Bishop) => '\u{265d}',
        (Color::Black, Role::Knight) => '\u{265e}',
        (Color::Black, Role::Pawn) => '\u{265f}',
    }
}

/// Renders `board` from White's side as a standalone SVG document.
///
/// The last pushed move is highlighted, as is the king of the side to move
/// when it stands in check.
pub fn render_board(board: &Board, size: u32) -> String {
    let pos = board.position();
    let last_move = board.last_move();
    let highlighted = |sq: Square| {
        last_move.is_some_and(|m| m.to() == sq || m.from() == Some(sq))
    };
    let checked_king = if pos.is_check() {
        pos.board().king_of(pos.turn())
    } else {
        None
    };

    let mut svg = String::with_capacity(16 * 1024);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {v} {v}" width="{size}" height="{size}">"#,
        v = VIEWBOX
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{v}" height="{v}" fill="{BORDER}"/>"#,
        v = VIEWBOX
    );

    for rank in 0..8u32 {
        for file in 0..8u32 {
            let sq = Square::from_coords(File::new(file), Rank::new(rank));
            let x = MARGIN + file * SQUARE;
            let y = MARGIN + (7 - rank) * SQUARE;
            let light = (file + rank) % 2 == 1;
            let fill = match (light, highlighted(sq)) {
                (true, false) => LIGHT,
                (false, false) => DARK,
                (true, true) => LIGHT_LASTMOVE,
                (false, true) => DARK_LASTMOVE,
            };
            let class = if highlighted(sq) {
                "square lastmove"
            } else {
                "square"
            };
            let _ = write!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{SQUARE}" height="{SQUARE}" class="{class}" fill="{fill}"/>"#
            );

            if checked_king == Some(sq) {
                let _ = write!(
                    svg,
                    r#"<rect x="{x}" y="{y}" width="{SQUARE}" height="{SQUARE}" class="check" fill="{CHECK}" fill-opacity="0.5"/>"#
                );
            }

            if let Some(piece) = pos.board().piece_at(sq) {
                let _ = write!(
                    svg,
                    r#"<text x="{cx}" y="{cy}" class="piece" font-size="38" text-anchor="middle" dominant-baseline="central">{g}</text>"#,
                    cx = x + SQUARE / 2,
                    cy = y + SQUARE / 2,
                    g = glyph(piece)
                );
            }
        }
    }

    for i in 0..8u32 {
        let file_label = char::from(b'a' + i as u8);
        let rank_label = char::from(b'1' + i as u8);
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" class="coord" font-size="14" fill="{COORD}" text-anchor="middle" dominant-baseline="central">{file_label}</text>"#,
            x = MARGIN + i * SQUARE + SQUARE / 2,
            y = VIEWBOX - MARGIN / 2
        );
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" class="coord" font-size="14" fill="{COORD}" text-anchor="middle" dominant-baseline="central">{rank_label}</text>"#,
            x = MARGIN / 2,
            y = MARGIN + (7 - i) * SQUARE + SQUARE / 2
        );
    }

    svg.push_str("</svg>");
    svg
}
