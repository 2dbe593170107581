use serde::{Serialize, Deserialize};

/// One product card from the listing page. All fields are raw text; a field
/// whose selector matched nothing is an empty string, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub subtitle: String,
}
