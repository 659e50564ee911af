use tracing::debug;

use crate::actor_framework::Entity;
use crate::app_system::CatalogError;
use crate::domain::Product;

impl Entity for Product {
    type Id = String;
    type CreateParams = Product;
    type Action = ();
    type ActionResult = ();
    type Error = CatalogError;

    /// Catalog entries arrive fully formed; only the id is assigned here.
    fn from_create_params(id: String, params: Product) -> Result<Self, CatalogError> {
        Ok(Self { id, ..params })
    }

    fn on_create(&mut self) -> Result<(), CatalogError> {
        debug!(product_id = %self.id, name = %self.name.en, "Product listed");
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), CatalogError> {
        Ok(())
    }
}
