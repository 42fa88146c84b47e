//! Admin workflow state machines.
//!
//! The admin dashboard's dialog flow is modeled as a tagged union per
//! entity list, so illegal combinations (two dialogs open, a delete
//! confirm during an edit) are unrepresentable. Transitions that a
//! rendered UI could not trigger return [`WorkflowError::Transition`].
//!
//! The list is refetched whenever a create or edit dialog transitions
//! to closed — submit *and* cancel — which is the only invalidation
//! mechanism; successful writes never patch the in-memory list
//! directly.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use shophunt_core::ServiceError;

use crate::forms::{FormErrors, ProductForm, SupplierForm};
use crate::model::{Product, SupplierWithProduct};
use crate::service::CatalogService;

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The transition is not available from the current state.
    #[error("{0}")]
    Transition(String),

    /// The submitted form failed validation; the dialog stays open and
    /// no network call was made.
    #[error("{0}")]
    Invalid(FormErrors),

    /// A remote call failed; surfaced with the raw message, operation
    /// aborted, no retry.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl WorkflowError {
    pub fn field_errors(&self) -> Option<&FormErrors> {
        match self {
            WorkflowError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

// ── Product admin ───────────────────────────────────────────────────

/// UI state of the product list.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAdminState {
    Idle,
    /// Create dialog open.
    Creating,
    /// Edit dialog open for this product.
    Editing(Product),
    /// Delete confirmation open; `busy` while the remote call runs.
    ConfirmingDelete { product: Product, busy: bool },
    /// Row selected, details panel expanded.
    DetailsExpanded(String),
}

impl ProductAdminState {
    fn label(&self) -> &'static str {
        match self {
            ProductAdminState::Idle => "idle",
            ProductAdminState::Creating => "creating",
            ProductAdminState::Editing(_) => "editing",
            ProductAdminState::ConfirmingDelete { .. } => "confirming delete",
            ProductAdminState::DetailsExpanded(_) => "details expanded",
        }
    }
}

/// Drives the product list's dialog flow against the catalog service.
pub struct ProductAdmin {
    service: Arc<CatalogService>,
    state: ProductAdminState,
    products: Vec<Product>,
}

impl ProductAdmin {
    pub fn new(service: Arc<CatalogService>) -> Self {
        Self {
            service,
            state: ProductAdminState::Idle,
            products: Vec::new(),
        }
    }

    pub fn state(&self) -> &ProductAdminState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Initial fetch (page load).
    pub async fn load(&mut self) -> Result<(), WorkflowError> {
        self.refetch().await
    }

    async fn refetch(&mut self) -> Result<(), WorkflowError> {
        self.products = self.service.list_products().await?;
        Ok(())
    }

    fn transition_err(&self, attempted: &str) -> WorkflowError {
        WorkflowError::Transition(format!(
            "cannot {attempted} while {}",
            self.state.label()
        ))
    }

    fn find(&self, id: &str) -> Result<Product, WorkflowError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("products/{id}")).into())
    }

    /// Toggle the expanded-details panel for a row.
    pub fn select(&mut self, id: &str) -> Result<(), WorkflowError> {
        match &self.state {
            ProductAdminState::Idle => {
                self.find(id)?;
                self.state = ProductAdminState::DetailsExpanded(id.to_string());
                Ok(())
            }
            ProductAdminState::DetailsExpanded(current) if current == id => {
                self.state = ProductAdminState::Idle;
                Ok(())
            }
            ProductAdminState::DetailsExpanded(_) => {
                self.find(id)?;
                self.state = ProductAdminState::DetailsExpanded(id.to_string());
                Ok(())
            }
            _ => Err(self.transition_err("select a row")),
        }
    }

    pub fn open_create(&mut self) -> Result<(), WorkflowError> {
        match self.state {
            ProductAdminState::Idle | ProductAdminState::DetailsExpanded(_) => {
                self.state = ProductAdminState::Creating;
                Ok(())
            }
            _ => Err(self.transition_err("open the create dialog")),
        }
    }

    /// Open the edit dialog for the expanded row.
    pub fn open_edit(&mut self) -> Result<&Product, WorkflowError> {
        let id = match &self.state {
            ProductAdminState::DetailsExpanded(id) => id.clone(),
            _ => return Err(self.transition_err("open the edit dialog")),
        };
        let product = self.find(&id)?;
        self.state = ProductAdminState::Editing(product);
        match &self.state {
            ProductAdminState::Editing(p) => Ok(p),
            _ => unreachable!(),
        }
    }

    /// Open the delete confirmation for the expanded row. The returned
    /// product carries the name the confirm prompt must display.
    pub fn request_delete(&mut self) -> Result<&Product, WorkflowError> {
        let id = match &self.state {
            ProductAdminState::DetailsExpanded(id) => id.clone(),
            _ => return Err(self.transition_err("request a delete")),
        };
        let product = self.find(&id)?;
        self.state = ProductAdminState::ConfirmingDelete {
            product,
            busy: false,
        };
        match &self.state {
            ProductAdminState::ConfirmingDelete { product, .. } => Ok(product),
            _ => unreachable!(),
        }
    }

    /// Close the open dialog without submitting. Closing a create or
    /// edit dialog still refetches the list.
    pub async fn cancel(&mut self) -> Result<(), WorkflowError> {
        match &self.state {
            ProductAdminState::Creating | ProductAdminState::Editing(_) => {
                self.state = ProductAdminState::Idle;
                self.refetch().await
            }
            ProductAdminState::ConfirmingDelete { busy: false, .. } => {
                self.state = ProductAdminState::Idle;
                Ok(())
            }
            ProductAdminState::ConfirmingDelete { busy: true, .. } => {
                Err(self.transition_err("cancel"))
            }
            _ => Err(self.transition_err("cancel")),
        }
    }

    /// Submit the create dialog. On success the dialog closes and the
    /// list is refetched; on failure the dialog stays open.
    pub async fn submit_create(&mut self, form: &ProductForm) -> Result<(), WorkflowError> {
        if self.state != ProductAdminState::Creating {
            return Err(self.transition_err("submit a create"));
        }
        let fields = form.validate().map_err(WorkflowError::Invalid)?;
        self.service.insert_product(fields).await?;
        self.state = ProductAdminState::Idle;
        self.refetch().await
    }

    /// Submit the edit dialog (full replace of the editable fields).
    pub async fn submit_edit(&mut self, form: &ProductForm) -> Result<(), WorkflowError> {
        let id = match &self.state {
            ProductAdminState::Editing(product) => product.id.clone(),
            _ => return Err(self.transition_err("submit an edit")),
        };
        let fields = form.validate().map_err(WorkflowError::Invalid)?;
        self.service.update_product(&id, fields).await?;
        self.state = ProductAdminState::Idle;
        self.refetch().await
    }

    /// Run the confirmed delete. The confirm state is busy-guarded for
    /// the duration of the remote call; a failure leaves the confirm
    /// open (non-busy) with the raw error surfaced to the caller.
    pub async fn confirm_delete(&mut self) -> Result<(), WorkflowError> {
        let product = match &self.state {
            ProductAdminState::ConfirmingDelete {
                product,
                busy: false,
            } => product.clone(),
            ProductAdminState::ConfirmingDelete { busy: true, .. } => {
                return Err(self.transition_err("confirm a delete"));
            }
            _ => return Err(self.transition_err("confirm a delete")),
        };

        self.state = ProductAdminState::ConfirmingDelete {
            product: product.clone(),
            busy: true,
        };

        match self.service.delete_product(&product.id).await {
            Ok(()) => {
                self.state = ProductAdminState::Idle;
                self.refetch().await
            }
            Err(err) => {
                warn!(id = %product.id, error = %err, "product delete failed");
                self.state = ProductAdminState::ConfirmingDelete {
                    product,
                    busy: false,
                };
                Err(err.into())
            }
        }
    }
}

// ── Supplier admin ──────────────────────────────────────────────────

/// UI state of the supplier list. Suppliers only support list and
/// create.
#[derive(Debug, Clone, PartialEq)]
pub enum SupplierAdminState {
    Idle,
    Creating,
}

pub struct SupplierAdmin {
    service: Arc<CatalogService>,
    state: SupplierAdminState,
    suppliers: Vec<SupplierWithProduct>,
}

impl SupplierAdmin {
    pub fn new(service: Arc<CatalogService>) -> Self {
        Self {
            service,
            state: SupplierAdminState::Idle,
            suppliers: Vec::new(),
        }
    }

    pub fn state(&self) -> &SupplierAdminState {
        &self.state
    }

    pub fn suppliers(&self) -> &[SupplierWithProduct] {
        &self.suppliers
    }

    pub async fn load(&mut self) -> Result<(), WorkflowError> {
        self.suppliers = self.service.list_suppliers().await?;
        Ok(())
    }

    pub fn open_create(&mut self) -> Result<(), WorkflowError> {
        match self.state {
            SupplierAdminState::Idle => {
                self.state = SupplierAdminState::Creating;
                Ok(())
            }
            SupplierAdminState::Creating => {
                Err(WorkflowError::Transition("create dialog already open".into()))
            }
        }
    }

    pub async fn cancel(&mut self) -> Result<(), WorkflowError> {
        match self.state {
            SupplierAdminState::Creating => {
                self.state = SupplierAdminState::Idle;
                self.load().await
            }
            SupplierAdminState::Idle => {
                Err(WorkflowError::Transition("no dialog open".into()))
            }
        }
    }

    pub async fn submit_create(&mut self, form: &SupplierForm) -> Result<(), WorkflowError> {
        if self.state != SupplierAdminState::Creating {
            return Err(WorkflowError::Transition(
                "cannot submit: create dialog is not open".into(),
            ));
        }
        let fields = form.validate().map_err(WorkflowError::Invalid)?;
        self.service.insert_supplier(fields).await?;
        self.state = SupplierAdminState::Idle;
        self.load().await
    }
}
