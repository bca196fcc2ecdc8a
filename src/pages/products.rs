//! Product page handlers.
//!
//! Listings and detail pages are public; the create, edit and delete pages
//! are only available to managers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;

use super::views::{ConfirmTemplate, MessageTemplate, Navbar, ProductView};
use crate::AppState;
use crate::constants::ERR_INVALID_PRODUCT_FORM;
use crate::db::ProductQuery;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product};
use crate::session::current_user;

// =============================================================================
// Form Types
// =============================================================================

/// Create/edit product form data.
///
/// Every field arrives as text; `validate` turns it into a product payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl ProductForm {
    /// Prefill the edit form from a stored product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.normalize().to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }

    /// Every field non-blank and a price above zero.
    ///
    /// Accepts a comma as decimal separator (`12,50`).
    pub fn validate(&self) -> std::result::Result<NewProduct, &'static str> {
        let name = self.name.trim();
        let description = self.description.trim();
        let image = self.image.trim();
        let price: Decimal = self
            .price
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| ERR_INVALID_PRODUCT_FORM)?;

        if name.is_empty() || description.is_empty() || image.is_empty() || price <= Decimal::ZERO
        {
            return Err(ERR_INVALID_PRODUCT_FORM);
        }

        Ok(NewProduct {
            name: name.to_string(),
            price,
            description: description.to_string(),
            image: image.to_string(),
        })
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Home page: every product as a carousel slide.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: Navbar,
    pub products: Vec<ProductView>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub nav: Navbar,
    pub products: Vec<ProductView>,
    pub search: String,
    pub sort_by_name: bool,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub nav: Navbar,
    pub product: ProductView,
}

/// Create/edit product form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub nav: Navbar,
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub form: ProductForm,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ProductFormTemplate {
    fn create(
        nav: Navbar,
        form: ProductForm,
        error: Option<String>,
        success: Option<String>,
    ) -> Self {
        Self {
            nav,
            heading: "Add product".to_string(),
            action: "/products/new".to_string(),
            submit_label: "Create".to_string(),
            form,
            error,
            success,
        }
    }

    fn edit(nav: Navbar, id: u64, form: ProductForm, error: Option<String>) -> Self {
        Self {
            nav,
            heading: format!("Edit product #{id}"),
            action: format!("/products/{id}/edit"),
            submit_label: "Save changes".to_string(),
            form,
            error,
            success: None,
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Navbar for a manager, or the access-denied page for anyone else.
async fn manager_only(session: &Session) -> std::result::Result<Navbar, Response> {
    let nav = Navbar::new(current_user(session).await);
    if nav.is_manager() {
        return Ok(nav);
    }

    tracing::warn!("Manager page refused for {:?}", nav.email());
    Err((
        StatusCode::FORBIDDEN,
        MessageTemplate::error(
            nav,
            "Access denied",
            "You must be logged in as a manager to access this page.",
        ),
    )
        .into_response())
}

fn product_not_found(nav: Navbar) -> Response {
    (
        StatusCode::NOT_FOUND,
        MessageTemplate::error(nav, "Error loading product", "Product not found"),
    )
        .into_response()
}

// =============================================================================
// Public Pages
// =============================================================================

/// Display the home page.
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let products = state.db.list_products(&ProductQuery::default()).await;

    HomeTemplate {
        nav: Navbar::new(current_user(&session).await),
        products: products.iter().map(ProductView::from).collect(),
    }
}

/// Display the product listing, with optional search and sort.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductQuery>,
) -> impl IntoResponse {
    let products = state.db.list_products(&query).await;

    ProductsIndexTemplate {
        nav: Navbar::new(current_user(&session).await),
        products: products.iter().map(ProductView::from).collect(),
        search: query.search_term().unwrap_or_default().to_string(),
        sort_by_name: query.sorts_by_name(),
    }
}

/// Display the product detail page.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
) -> Result<Response> {
    let nav = Navbar::new(current_user(&session).await);

    match state.db.get_product(id).await {
        Ok(product) => Ok(ProductShowTemplate {
            nav,
            product: ProductView::from(&product),
        }
        .into_response()),
        Err(AppError::ProductNotFound) => Ok(product_not_found(nav)),
        Err(e) => Err(e),
    }
}

// =============================================================================
// Manager Pages
// =============================================================================

/// Display the create product form.
pub async fn new_form(session: Session) -> Response {
    match manager_only(&session).await {
        Ok(nav) => ProductFormTemplate::create(nav, ProductForm::default(), None, None)
            .into_response(),
        Err(denied) => denied,
    }
}

/// Handle create product form submission.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let nav = match manager_only(&session).await {
        Ok(nav) => nav,
        Err(denied) => return Ok(denied),
    };

    let new_product = match form.validate() {
        Ok(new_product) => new_product,
        Err(msg) => {
            let page = ProductFormTemplate::create(nav, form, Some(msg.to_string()), None);
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let product = state.db.create_product(new_product).await?;

    Ok(ProductFormTemplate::create(
        nav,
        ProductForm::default(),
        None,
        Some(format!("Product {} created successfully!", product.name)),
    )
    .into_response())
}

/// Display the edit form, prefilled with the stored product.
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
) -> Result<Response> {
    let nav = match manager_only(&session).await {
        Ok(nav) => nav,
        Err(denied) => return Ok(denied),
    };

    match state.db.get_product(id).await {
        Ok(product) => {
            let form = ProductForm::from_product(&product);
            Ok(ProductFormTemplate::edit(nav, id, form, None).into_response())
        }
        Err(AppError::ProductNotFound) => Ok(product_not_found(nav)),
        Err(e) => Err(e),
    }
}

/// Handle edit form submission; redirects to the detail page.
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let nav = match manager_only(&session).await {
        Ok(nav) => nav,
        Err(denied) => return Ok(denied),
    };

    let changes = match form.validate() {
        Ok(changes) => changes,
        Err(msg) => {
            let page = ProductFormTemplate::edit(nav, id, form, Some(msg.to_string()));
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match state.db.update_product(id, changes.into()).await {
        Ok(_) => Ok(Redirect::to(&format!("/products/{id}")).into_response()),
        Err(AppError::ProductNotFound) => Ok(product_not_found(nav)),
        Err(e) => Err(e),
    }
}

/// Ask for confirmation before deleting.
pub async fn confirm_delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
) -> Result<Response> {
    let nav = match manager_only(&session).await {
        Ok(nav) => nav,
        Err(denied) => return Ok(denied),
    };

    match state.db.get_product(id).await {
        Ok(product) => Ok(ConfirmTemplate {
            nav,
            title: "Confirm deletion".to_string(),
            message: format!(
                "Are you sure you want to delete {} (ID {})?",
                product.name, product.id
            ),
            action: format!("/products/{id}/delete"),
            confirm_label: "Delete".to_string(),
            cancel_href: format!("/products/{id}"),
        }
        .into_response()),
        Err(AppError::ProductNotFound) => Ok(product_not_found(nav)),
        Err(e) => Err(e),
    }
}

/// Handle the confirmed deletion.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
) -> Result<Response> {
    let nav = match manager_only(&session).await {
        Ok(nav) => nav,
        Err(denied) => return Ok(denied),
    };

    match state.db.delete_product(id).await {
        Ok(()) => Ok(MessageTemplate::success(
            nav,
            "Product removed.",
            "The record was deleted successfully.",
        )
        .into_response()),
        Err(AppError::ProductNotFound) => Ok(product_not_found(nav)),
        Err(e) => Err(e),
    }
}
