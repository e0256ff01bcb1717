//! Decorator source generator.
//!
//! Turns a [`DecoratorDescriptor`] into the text of its partial class. The
//! output depends on nothing but the descriptor and the configuration, so
//! equal descriptors always produce byte-identical text.
//!
//! # Examples
//!
//! ```
//! use decorgen_codegen::DecoratorGenerator;
//! use decorgen_core::{
//!     DecoratorDescriptor, GeneratorConfig, InterfaceDescriptor, MemberDescriptor,
//!     ParameterDescriptor, TypeDescriptor,
//! };
//!
//! let generator = DecoratorGenerator::new(GeneratorConfig::default()).unwrap();
//! let descriptor = DecoratorDescriptor::new(
//!     TypeDescriptor::new(Some("global::Shop"), "StoreDecorator"),
//!     vec![InterfaceDescriptor {
//!         namespace: Some("global::Shop".to_string()),
//!         fully_qualified_name: "global::Shop.IStore".to_string(),
//!         minimally_qualified_name: "IStore".to_string(),
//!         accessor_name: "GetInnerIStore".to_string(),
//!         members: vec![MemberDescriptor {
//!             name: "Count".to_string(),
//!             return_type: "int".to_string(),
//!             is_awaitable: false,
//!             parameters: vec![ParameterDescriptor::by_value("string", "category")],
//!         }],
//!     }],
//! );
//!
//! let source = generator.generate(&descriptor).unwrap();
//! assert_eq!(source.hint_name.as_str(), "Shop.StoreDecorator.g.cs");
//! assert!(source.content.contains(
//!     "int global::Shop.IStore.Count(string category) => Decorate(() => GetInnerIStore().Count(category));"
//! ));
//! ```

use crate::template_engine::TemplateEngine;
use crate::types::{DecoratorContext, GeneratedSource, MarkerContext};
use decorgen_core::{DecoratorDescriptor, Error, GeneratorConfig, Result};

/// Generator for decorator partial classes and the marker attribute.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; [`generate`](Self::generate) takes
/// `&self` and may run concurrently for independent descriptors.
#[derive(Debug)]
pub struct DecoratorGenerator<'a> {
    engine: TemplateEngine<'a>,
    config: GeneratorConfig,
}

impl DecoratorGenerator<'_> {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, config })
    }

    /// Configuration the generator was created with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the partial class for one decorator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] if the decorator's unit name equals
    /// the marker attribute's, or a template error if rendering fails.
    pub fn generate(&self, descriptor: &DecoratorDescriptor) -> Result<GeneratedSource> {
        let hint_name = descriptor.target.hint_name(&self.config.hint_extension);
        if hint_name == self.config.marker_hint_name() {
            return Err(Error::InvalidSymbol {
                symbol: descriptor.target.to_string(),
                reason: format!("unit name {hint_name} is reserved for the marker attribute"),
            });
        }
        let context = DecoratorContext::from(descriptor);
        let content = self
            .engine
            .render(TemplateEngine::DECORATOR_TEMPLATE, &context)?;

        tracing::debug!(
            hint_name = %hint_name,
            interfaces = descriptor.interfaces.len(),
            members = descriptor.member_count(),
            "generated decorator source"
        );

        Ok(GeneratedSource::new(hint_name, content))
    }

    /// Generates the marker attribute source unit.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_codegen::DecoratorGenerator;
    /// use decorgen_core::GeneratorConfig;
    ///
    /// let generator = DecoratorGenerator::new(GeneratorConfig::default()).unwrap();
    /// let marker = generator.marker_source().unwrap();
    /// assert_eq!(marker.hint_name.as_str(), "GenericDecoratorAttribute.g.cs");
    /// ```
    pub fn marker_source(&self) -> Result<GeneratedSource> {
        let context = MarkerContext {
            namespace: self.config.marker_namespace.clone(),
            name: self.config.marker_name.clone(),
        };
        let content = self
            .engine
            .render(TemplateEngine::MARKER_TEMPLATE, &context)?;
        Ok(GeneratedSource::new(self.config.marker_hint_name(), content))
    }
}
