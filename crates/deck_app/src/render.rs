//! Plain-text rendering of the deck view model.

use deck_core::{BadgeView, CardView, DeckViewModel};

const DESCRIPTION_PREVIEW_CHARS: usize = 160;

pub(crate) fn draw(view: &DeckViewModel) {
    let loading = if view.loading { ", loading" } else { "" };
    println!();
    println!("--- deck ({} queued{loading}) ---", view.remaining);

    let Some(card) = view.deck.first() else {
        println!("No more jobs to swipe. Check back later!");
        return;
    };

    println!("[{}] {} | {}", card.avatar, card.company, card.title);
    println!("{}", badge_line(&view.badge));
    println!("{}", description_preview(card));
    for peek in view.deck.iter().skip(1) {
        println!("  next: {} | {}", peek.company, peek.title);
    }
    println!("(apply / skip / offset number / quit)");
}

fn badge_line(badge: &BadgeView) -> String {
    match badge {
        BadgeView::None => "compatibility: --%".to_string(),
        BadgeView::Cached(result) => format!("compatibility: {} (cached)", result.percent),
        BadgeView::Loading => "compatibility: computing...".to_string(),
        BadgeView::Ready(result) => {
            if result.features.is_empty() {
                format!("compatibility: {}", result.percent)
            } else {
                format!(
                    "compatibility: {} | {}",
                    result.percent,
                    result.features.join(" * ")
                )
            }
        }
        BadgeView::Failed(message) => format!("compatibility: error ({message})"),
    }
}

fn description_preview(card: &CardView) -> String {
    let mut preview: String = card
        .description
        .chars()
        .take(DESCRIPTION_PREVIEW_CHARS)
        .collect();
    if card.description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}
