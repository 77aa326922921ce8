// src/ui/helpers.rs
use crate::model::{AnswerCard, AnswerMark, CardColor};
use crate::ui::board::DeckCard;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const CARD_SIZE: Vec2 = Vec2::new(120.0, 170.0);
pub const ANSWER_SIZE: Vec2 = Vec2::new(150.0, 90.0);

pub fn card_color(color: CardColor) -> Color32 {
    match color {
        CardColor::Blue => Color32::from_rgb(52, 120, 220),
        CardColor::Green => Color32::from_rgb(46, 160, 90),
        CardColor::Yellow => Color32::from_rgb(225, 185, 40),
        CardColor::Red => Color32::from_rgb(200, 60, 60),
    }
}

/// Carta del mazo inicial. Devuelve true si se pulsó.
pub fn deck_card(ui: &mut Ui, card: DeckCard, enabled: bool) -> bool {
    let button = match card {
        DeckCard::FaceDown => Button::new(RichText::new("?").size(48.0).strong())
            .fill(Color32::from_rgb(60, 60, 80))
            .min_size(CARD_SIZE),
        DeckCard::FaceUp { number, color } => {
            Button::new(RichText::new(format!("PREGUNTA {number}!")).strong().color(Color32::BLACK))
                .fill(card_color(color))
                .min_size(CARD_SIZE)
        }
    };
    ui.add_enabled(enabled, button).clicked()
}

/// Carta de respuesta con su marca (acertada, descartada, seleccionada).
pub fn answer_card(ui: &mut Ui, card: &AnswerCard) -> bool {
    let fill = match card.mark {
        AnswerMark::Correct => Color32::from_rgb(46, 160, 90),
        AnswerMark::Wrong => Color32::from_rgb(120, 40, 40),
        AnswerMark::Open | AnswerMark::Locked => ui.visuals().widgets.inactive.weak_bg_fill,
    };

    let mut text = RichText::new(&card.text).size(18.0);
    if card.mark == AnswerMark::Wrong {
        text = text.strikethrough();
    }

    let mut button = Button::new(text).fill(fill).min_size(ANSWER_SIZE);
    if card.selected {
        button = button.stroke(egui::Stroke::new(2.0, Color32::WHITE));
    }

    // Las acertadas y bloqueadas siguen aceptando clicks (sólo marcan selección)
    ui.add_enabled(card.is_selectable(), button).clicked()
}
