//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Stress token styles ---

/// Style for the `index`-th token of a word
pub fn token(index: usize) -> Style {
    let color = if index % 2 == 0 {
        palette::TOKEN_EVEN
    } else {
        palette::TOKEN_ODD
    };
    Style::default().fg(color)
}

pub fn token_separator() -> Style {
    Style::default().fg(palette::TOKEN_SEPARATOR)
}

// --- Block builders ---

/// Rounded bordered panel, highlighted when focused
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_styles_alternate() {
        assert_eq!(token(0), token(2));
        assert_ne!(token(0), token(1));
    }

    #[test]
    fn test_glass_block_focus_changes_border() {
        let focused = glass_block(true);
        let unfocused = glass_block(false);
        assert_ne!(format!("{:?}", focused), format!("{:?}", unfocused));
    }
}
