//! Hand-off between a rendered card and whatever router owns the routes.

use crate::render::Card;

/// Navigate-on-activate primitive supplied by the routing layer.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Navigator that records every visited path, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
}

impl NavigationHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl Navigator for NavigationHistory {
    fn navigate(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }
}

impl Card {
    /// Hands the card's route to `navigator`.
    pub fn activate<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate(self.href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCatalog;
    use crate::render::IndexRenderer;

    #[test]
    fn activating_loan_card_navigates_to_its_route_only() {
        let page = IndexRenderer::render(&ToolCatalog::default());
        let loan = page
            .cards
            .iter()
            .find(|card| card.title == "Loan Calculator")
            .expect("loan card should render");

        let mut history = NavigationHistory::new();
        loan.activate(&mut history);

        assert_eq!(history.entries(), ["/tools/calculators/loan-calculator"]);
    }

    #[test]
    fn each_card_navigates_to_its_own_descriptor_path() {
        let catalog = ToolCatalog::default();
        let page = IndexRenderer::render(&catalog);
        for (card, tool) in page.cards.iter().zip(catalog.all()) {
            let mut history = NavigationHistory::new();
            card.activate(&mut history);
            assert_eq!(history.current(), Some(tool.path));
            assert_eq!(history.entries().len(), 1);
        }
    }

    #[test]
    fn activation_works_through_trait_objects() {
        let page = IndexRenderer::render(&ToolCatalog::default());
        let mut history = NavigationHistory::new();
        {
            let navigator: &mut dyn Navigator = &mut history;
            page.cards[0].activate(&mut *navigator);
            page.cards[1].activate(&mut *navigator);
        }
        assert_eq!(
            history.entries(),
            [
                "/tools/calculators/age-calculator",
                "/tools/calculators/percentage-calculator",
            ]
        );
    }
}
