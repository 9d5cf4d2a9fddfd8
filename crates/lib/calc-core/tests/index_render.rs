use calc_core::{IndexRenderer, NavigationHistory, ToolCatalog};
use calc_registry::CALCULATOR_TOOLS;

fn render_html() -> String {
    IndexRenderer::render(&ToolCatalog::default()).to_html()
}

#[test]
fn rendering_is_idempotent() {
    let first = render_html();
    let second = render_html();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn html_contains_one_card_per_tool() {
    let html = render_html();
    assert_eq!(html.matches("class=\"tool-card\"").count(), CALCULATOR_TOOLS.len());
    assert_eq!(html.matches("class=\"tool-card\"").count(), 16);
}

#[test]
fn html_keeps_registry_order() {
    let html = render_html();
    let age = html.find("Age Calculator").expect("age card should render");
    let percentage = html
        .find("Percentage Calculator")
        .expect("percentage card should render");
    assert!(age < percentage);

    let mut last = 0;
    for tool in CALCULATOR_TOOLS {
        let needle = format!("href=\"{}\"", tool.path);
        let pos = html
            .find(&needle)
            .unwrap_or_else(|| panic!("missing card for {}", tool.id));
        assert!(pos >= last, "{} rendered out of order", tool.id);
        last = pos;
    }
}

#[test]
fn gst_card_shows_its_description() {
    let html = render_html();
    let card_start = html
        .find("data-key=\"gst-calculator\"")
        .expect("gst card should render");
    let card = &html[card_start..];
    let card_end = card.find("</li>").expect("card should close");
    let card = &card[..card_end];

    assert!(card.contains("<h2>GST Calculator</h2>"));
    assert!(card.contains("<p>Calculate Goods and Services Tax</p>"));
}

#[test]
fn activated_card_resolves_back_to_its_descriptor() {
    let catalog = ToolCatalog::default();
    let page = IndexRenderer::render(&catalog);
    let mut history = NavigationHistory::new();

    for card in &page.cards {
        card.activate(&mut history);
        let target = history.current().expect("navigation should be recorded");
        let tool = catalog
            .find_by_path(target)
            .expect("every card route should resolve");
        assert_eq!(tool.id, card.key);
    }
    assert_eq!(history.entries().len(), CALCULATOR_TOOLS.len());
}
