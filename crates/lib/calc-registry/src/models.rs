use serde::Serialize;

use crate::schema::ROUTE_PREFIX;

/// Glyph shown on a calculator card.
///
/// The registry only names the glyph; resolving it into a drawable symbol is
/// left to whatever renders the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolIcon {
    Calendar,
    CalendarRange,
    Percent,
    Activity,
    Landmark,
    Receipt,
    Flame,
    TrendingUp,
    Coins,
    PiggyBank,
    Tag,
    HandCoins,
    Fuel,
    Calculator,
    Home,
    Scale,
}

impl ToolIcon {
    /// Stable kebab-case token for the glyph (matches the serialized form).
    #[must_use]
    pub const fn glyph_name(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::CalendarRange => "calendar-range",
            Self::Percent => "percent",
            Self::Activity => "activity",
            Self::Landmark => "landmark",
            Self::Receipt => "receipt",
            Self::Flame => "flame",
            Self::TrendingUp => "trending-up",
            Self::Coins => "coins",
            Self::PiggyBank => "piggy-bank",
            Self::Tag => "tag",
            Self::HandCoins => "hand-coins",
            Self::Fuel => "fuel",
            Self::Calculator => "calculator",
            Self::Home => "home",
            Self::Scale => "scale",
        }
    }
}

/// One entry on the calculator directory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub icon: ToolIcon,
}

impl ToolDescriptor {
    /// Route segment after the shared calculator prefix.
    #[must_use]
    pub fn slug(&self) -> Option<&'static str> {
        self.path
            .strip_prefix(ROUTE_PREFIX)
            .filter(|slug| !slug.is_empty())
    }
}
