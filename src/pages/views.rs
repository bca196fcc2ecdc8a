//! Display data and shared page templates.

use askama::Template;
use askama_web::WebTemplate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_PREFIX;
use crate::models::Product;
use crate::session::CurrentUser;

/// Navbar state, present on every page.
#[derive(Debug, Clone, Default)]
pub struct Navbar {
    pub user: Option<CurrentUser>,
}

impl Navbar {
    pub fn new(user: Option<CurrentUser>) -> Self {
        Self { user }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_manager(&self) -> bool {
        self.user.as_ref().is_some_and(CurrentUser::is_manager)
    }

    pub fn email(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.email.as_str())
    }

    pub fn role(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.role.as_str())
    }
}

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: u64,
    pub name: String,
    /// Display price, e.g. `R$ 12,50`
    pub price: String,
    pub description: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: format_price(product.price),
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}

/// Two decimals, comma separator: `12.5` becomes `R$ 12,50`.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{} {}", CURRENCY_PREFIX, format!("{rounded:.2}").replace('.', ","))
}

/// Success or error box with a link back.
#[derive(Template, WebTemplate)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub nav: Navbar,
    pub title: String,
    pub message: String,
    pub is_error: bool,
    pub back_href: String,
}

impl MessageTemplate {
    pub fn success(nav: Navbar, title: &str, message: &str) -> Self {
        Self {
            nav,
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
            back_href: "/".to_string(),
        }
    }

    pub fn error(nav: Navbar, title: &str, message: &str) -> Self {
        Self {
            is_error: true,
            ..Self::success(nav, title, message)
        }
    }
}

/// Reusable confirmation dialog.
///
/// Confirming submits a POST to `action`; cancelling follows `cancel_href`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/confirm.html")]
pub struct ConfirmTemplate {
    pub nav: Navbar,
    pub title: String,
    pub message: String,
    pub action: String,
    pub confirm_label: String,
    pub cancel_href: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(125, 1)), "R$ 12,50");
        assert_eq!(format_price(Decimal::new(1999, 0)), "R$ 1999,00");
        assert_eq!(format_price(Decimal::new(10005, 3)), "R$ 10,01");
    }

    #[test]
    fn test_navbar_roles() {
        let guest = Navbar::default();
        assert!(!guest.is_logged_in());
        assert!(!guest.is_manager());
        assert_eq!(guest.email(), "");

        let manager = Navbar::new(Some(CurrentUser {
            email: "boss@shop.com".to_string(),
            role: Role::Manager,
        }));
        assert!(manager.is_logged_in());
        assert!(manager.is_manager());
        assert_eq!(manager.role(), "manager");
    }

    #[test]
    fn test_confirm_dialog_renders() {
        let html = ConfirmTemplate {
            nav: Navbar::default(),
            title: "Confirm deletion".to_string(),
            message: "Delete product <3>?".to_string(),
            action: "/products/3/delete".to_string(),
            confirm_label: "Delete".to_string(),
            cancel_href: "/products/3".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("action=\"/products/3/delete\""));
        assert!(html.contains("Delete product"));
        assert!(!html.contains("<3>"));
    }
}
