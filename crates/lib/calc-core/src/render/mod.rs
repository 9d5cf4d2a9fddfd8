//! Index page rendering.
//!
//! The renderer is a pure function of the catalog: one card per descriptor, in
//! catalog order, with no branching on content. `IndexPage` renders itself to
//! a complete HTML document through `Display`.

mod html;

use std::fmt;

use calc_registry::schema::{INDEX_SUBTITLE, INDEX_TITLE};
use calc_registry::{ToolDescriptor, ToolIcon};

use crate::catalog::ToolCatalog;

pub use html::Escaped;

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f8fafc;color:#0f172a}\
main{max-width:72rem;margin:0 auto;padding:2rem 1rem}\
.tool-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1rem;list-style:none;padding:0}\
.tool-card{display:flex;gap:.75rem;padding:1rem;border:1px solid #e2e8f0;border-radius:.75rem;background:#fff;color:inherit;text-decoration:none}\
.tool-card:hover{border-color:#6366f1}\
.tool-card h2{margin:0 0 .25rem;font-size:1.05rem}\
.tool-card p{margin:0;color:#475569;font-size:.9rem}";

/// A navigable card for a single tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub icon: ToolIcon,
}

impl From<&ToolDescriptor> for Card {
    fn from(tool: &ToolDescriptor) -> Self {
        Self {
            key: tool.id,
            title: tool.title,
            description: tool.description,
            href: tool.path,
            icon: tool.icon,
        }
    }
}

/// The rendered directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<Card>,
}

impl IndexPage {
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

pub struct IndexRenderer;

impl IndexRenderer {
    #[must_use]
    pub fn render(catalog: &ToolCatalog) -> IndexPage {
        IndexPage {
            title: INDEX_TITLE,
            subtitle: INDEX_SUBTITLE,
            cards: catalog.all().iter().map(Card::from).collect(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<li data-key=\"{}\">", Escaped(self.key))?;
        writeln!(f, "<a class=\"tool-card\" href=\"{}\">", Escaped(self.href))?;
        writeln!(
            f,
            "<span class=\"tool-icon icon-{0}\" data-icon=\"{0}\" aria-hidden=\"true\"></span>",
            self.icon.glyph_name()
        )?;
        writeln!(f, "<div>")?;
        writeln!(f, "<h2>{}</h2>", Escaped(self.title))?;
        writeln!(f, "<p>{}</p>", Escaped(self.description))?;
        writeln!(f, "</div>")?;
        writeln!(f, "</a>")?;
        writeln!(f, "</li>")
    }
}

impl fmt::Display for IndexPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(f, "<title>{}</title>", Escaped(self.title))?;
        writeln!(f, "<style>{STYLESHEET}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<main>")?;
        writeln!(f, "<h1>{}</h1>", Escaped(self.title))?;
        writeln!(f, "<p class=\"subtitle\">{}</p>", Escaped(self.subtitle))?;
        writeln!(f, "<ul class=\"tool-grid\">")?;
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        writeln!(f, "</ul>")?;
        writeln!(f, "</main>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_registry::CALCULATOR_TOOLS;

    #[test]
    fn renders_one_card_per_tool_in_order() {
        let page = IndexRenderer::render(&ToolCatalog::default());
        assert_eq!(page.cards.len(), CALCULATOR_TOOLS.len());
        let keys: Vec<_> = page.cards.iter().map(|card| card.key).collect();
        let ids: Vec<_> = CALCULATOR_TOOLS.iter().map(|tool| tool.id).collect();
        assert_eq!(keys, ids);
    }

    #[test]
    fn card_text_matches_descriptor() {
        let page = IndexRenderer::render(&ToolCatalog::default());
        for (card, tool) in page.cards.iter().zip(CALCULATOR_TOOLS) {
            assert_eq!(card.title, tool.title);
            assert_eq!(card.description, tool.description);
            assert_eq!(card.href, tool.path);
            assert_eq!(card.icon, tool.icon);
        }
    }

    #[test]
    fn card_markup_escapes_text() {
        let card = Card {
            key: "tip-calculator",
            title: "Tips & Splits",
            description: "Split <bills>",
            href: "/tools/calculators/tip-calculator",
            icon: ToolIcon::HandCoins,
        };
        let html = card.to_string();
        assert!(html.contains("<h2>Tips &amp; Splits</h2>"));
        assert!(html.contains("<p>Split &lt;bills&gt;</p>"));
        assert!(html.contains("href=\"/tools/calculators/tip-calculator\""));
        assert!(html.contains("data-icon=\"hand-coins\""));
    }
}
