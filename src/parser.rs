use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::Product;

/// Product card container on the listing page.
static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-card").unwrap());

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-card__title").unwrap());

static SUBTITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-card__subtitle").unwrap());

static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-card__price").unwrap());

/// Collects one `Product` per card container, in document order.
pub fn extract_products(html: &str) -> Vec<Product> {
    let doc = Html::parse_document(html);
    doc.select(&CARD)
        .map(|card| Product {
            name: child_text(card, &TITLE),
            price: child_text(card, &PRICE),
            subtitle: child_text(card, &SUBTITLE),
        })
        .collect()
}

/// Concatenated text of every descendant matching `selector`, trimmed.
/// Empty string when nothing matches.
fn child_text(el: ElementRef, selector: &Selector) -> String {
    el.select(selector)
        .flat_map(|node| node.text())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARD_PAGE: &str = r#"
        <html><body>
          <div class="product-card">
            <div class="product-card__title">A</div>
            <div class="product-card__subtitle">Air</div>
            <div class="product-card__price">$10</div>
          </div>
          <div class="product-card">
            <div class="product-card__title">B</div>
            <div class="product-card__subtitle">Max</div>
            <div class="product-card__price">$20</div>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_one_record_per_card_in_document_order() {
        let products = extract_products(TWO_CARD_PAGE);
        assert_eq!(
            products,
            vec![
                Product {
                    name: "A".into(),
                    price: "$10".into(),
                    subtitle: "Air".into(),
                },
                Product {
                    name: "B".into(),
                    price: "$20".into(),
                    subtitle: "Max".into(),
                },
            ]
        );
    }

    #[test]
    fn missing_child_selector_yields_empty_string() {
        let html = r#"
            <div class="product-card">
              <div class="product-card__title">Pegasus</div>
              <div class="product-card__price">$130</div>
            </div>
        "#;
        let products = extract_products(html);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Pegasus");
        assert_eq!(products[0].subtitle, "");
        assert_eq!(products[0].price, "$130");
    }

    #[test]
    fn page_without_cards_yields_empty_vec() {
        let products = extract_products("<html><body><p>sold out</p></body></html>");
        assert!(products.is_empty());
    }

    #[test]
    fn child_text_is_trimmed() {
        let html = r#"
            <div class="product-card">
              <div class="product-card__title">
                Dunk Low
              </div>
            </div>
        "#;
        let products = extract_products(html);
        assert_eq!(products[0].name, "Dunk Low");
    }
}
