//! Workshop
//!
//! The facade tying the construction disciplines together:
//! - Looks up named recipes and directs builders through them
//! - Dispatches factory tags to constructors
//! - Instantiates prototype templates
//!
//! The workshop owns its registries and factory; the shared context stays
//! a separate accessor with its own lifecycle.

use crate::error::ArtificeError;
use crate::types::ArtificeConfig;
use artifice_builder::{Builder, Director};
use artifice_factory::{burger_factory, ProductFactory, ProductTag};
use artifice_product::{Burger, Product};
use artifice_prototype::Prototype;
use artifice_registry::{BuildSpec, RecipeRegistry, TemplateRegistry};

/// The central construction facade
#[derive(Debug)]
pub struct Workshop {
    /// Configuration
    config: ArtificeConfig,
    /// Named build specs
    recipes: RecipeRegistry,
    /// Named prototype templates
    templates: TemplateRegistry,
    /// Burger dispatch table
    burgers: ProductFactory<Burger>,
    /// Step sequencer
    director: Director,
}

impl Workshop {
    /// Create a workshop
    ///
    /// Built-in recipes and factory tags are registered per `config`.
    #[must_use]
    pub fn new(config: ArtificeConfig) -> Self {
        let recipes = if config.default_recipes {
            RecipeRegistry::with_defaults()
        } else {
            RecipeRegistry::new()
        };
        let burgers = if config.default_tags {
            burger_factory()
        } else {
            ProductFactory::new()
        };

        tracing::info!(
            "Workshop ready: {} recipes, {} tags",
            recipes.len(),
            burgers.len()
        );

        Self {
            config,
            recipes,
            templates: TemplateRegistry::new(),
            burgers,
            director: Director::new(),
        }
    }

    /// Register a recipe under a name
    ///
    /// # Errors
    /// Returns [`ArtificeError::RegistryError`] on a duplicate name.
    pub fn register_recipe(&self, name: &str, spec: BuildSpec) -> Result<(), ArtificeError> {
        self.recipes.register(name, spec)?;
        Ok(())
    }

    /// Register a prototype template under a name
    ///
    /// # Errors
    /// Returns [`ArtificeError::RegistryError`] on a duplicate name or a
    /// malformed template.
    pub fn register_template<T>(&self, name: &str, template: T) -> Result<(), ArtificeError>
    where
        T: Prototype + Product,
    {
        self.templates.register(name, template)?;
        Ok(())
    }

    /// Build a product by playing a named recipe against a builder
    ///
    /// # Errors
    /// - [`ArtificeError::RegistryError`] if the recipe is unknown
    /// - [`ArtificeError::BuildFailed`] if a step fails or slots stay unset
    pub fn build_recipe<B: Builder>(
        &self,
        name: &str,
        builder: &mut B,
    ) -> Result<B::Output, ArtificeError> {
        let spec = self.recipes.get(name)?;
        tracing::info!("Building recipe: {} ({} steps)", name, spec.len());
        let product = self.director.make(builder, &spec)?;
        Ok(product)
    }

    /// Create a burger for a dispatch tag
    ///
    /// # Errors
    /// Returns [`ArtificeError::DispatchFailed`] for an unrecognized tag.
    pub fn create(&self, tag: impl Into<ProductTag>) -> Result<Burger, ArtificeError> {
        let tag = tag.into();
        let burger = self.burgers.create(&tag)?;
        tracing::info!("Created burger: {}", tag);
        Ok(burger)
    }

    /// Instantiate a prototype template as its concrete type
    ///
    /// # Errors
    /// Returns [`ArtificeError::RegistryError`] on a miss, kind mismatch,
    /// or a template that fails validation.
    pub fn instantiate<T>(&self, name: &str) -> Result<T, ArtificeError>
    where
        T: Prototype + Product,
    {
        let product = self.templates.instantiate_as::<T>(name)?;
        tracing::info!("Instantiated template: {} ({})", name, product.kind());
        Ok(product)
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ArtificeConfig {
        &self.config
    }

    /// Get the recipe registry
    #[inline]
    #[must_use]
    pub fn recipes(&self) -> &RecipeRegistry {
        &self.recipes
    }

    /// Get the template registry
    #[inline]
    #[must_use]
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Get the burger factory
    #[inline]
    #[must_use]
    pub fn factory(&self) -> &ProductFactory<Burger> {
        &self.burgers
    }
}

impl Default for Workshop {
    fn default() -> Self {
        Self::new(ArtificeConfig::default())
    }
}
