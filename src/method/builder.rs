//! # ResolvedMethod Builder
//!
//! Provides a fluent API for turning the description a method builder collects into a
//! [`BuilderMethod`].
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ilmethod::prelude::*;
//!
//! struct Body;
//! impl IlInjector for Body {}
//!
//! let types = TypeDictionary::new();
//! let body = Arc::new(Body);
//!
//! let method = ResolvedMethodBuilder::new("increment")
//!     .declaring_unit("counter.cpp")
//!     .line("17")
//!     .parameter(types.int64())
//!     .returns(types.int64())
//!     .injector(&body)
//!     .build()?;
//!
//! assert_eq!(method.signature(), "(J)J");
//! assert!(method.is_interpreted());
//! # Ok::<(), ilmethod::Error>(())
//! ```
//!
//! ## Validation
//!
//! - **Name Required**: The method name cannot be empty
//! - **Injector Required**: Every method needs the object that generates its body, it is the
//!   method's identity
//! - **Signature Fits**: The encoded signature must fit the encoder's capacity

use std::sync::{Arc, Weak};

use crate::{
    method::{BuilderMethod, EntryPoint, IlInjector},
    signature::SignatureEncoder,
    types::{DataType, IlType, IlTypeKind, IlTypeRef},
    Error, Result,
};

/// Builder for [`BuilderMethod`] instances.
///
/// Unset labels default to empty strings and an unset return type to `NoType`.
#[derive(Debug, Clone)]
pub struct ResolvedMethodBuilder {
    name: String,
    declaring_unit: String,
    line: String,
    parameters: Vec<IlTypeRef>,
    return_type: Option<IlTypeRef>,
    entry_point: Option<EntryPoint>,
    injector: Option<Weak<dyn IlInjector>>,
    encoder: SignatureEncoder,
}

impl ResolvedMethodBuilder {
    /// Creates a builder for a method called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        ResolvedMethodBuilder {
            name: name.into(),
            declaring_unit: String::new(),
            line: String::new(),
            parameters: Vec::new(),
            return_type: None,
            entry_point: None,
            injector: None,
            encoder: SignatureEncoder::default(),
        }
    }

    /// Sets the label of the declaring unit, usually the source file.
    #[must_use]
    pub fn declaring_unit(mut self, declaring_unit: impl Into<String>) -> Self {
        self.declaring_unit = declaring_unit.into();
        self
    }

    /// Sets the source-line label.
    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.line = line.into();
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: IlTypeRef) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends several parameters in order.
    #[must_use]
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = IlTypeRef>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, return_type: IlTypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Sets the entry point of an already compiled method.
    #[must_use]
    pub fn entry_point(mut self, entry_point: EntryPoint) -> Self {
        self.entry_point = Some(entry_point);
        self
    }

    /// Sets the object generating the method body.
    ///
    /// Only a weak reference is kept, the caller owns the injector.
    #[must_use]
    pub fn injector<I: IlInjector + 'static>(mut self, injector: &Arc<I>) -> Self {
        self.injector = Some(Arc::downgrade(injector) as Weak<dyn IlInjector>);
        self
    }

    /// Uses `encoder` instead of the default [`SignatureEncoder`].
    #[must_use]
    pub fn encoder(mut self, encoder: SignatureEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Validates the description and creates the method.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMethod`] if the name is empty or no live injector was set, and
    /// [`Error::SignatureTooLong`] if the signature does not fit the encoder's capacity.
    pub fn build(self) -> Result<BuilderMethod> {
        if self.name.is_empty() {
            return Err(Error::InvalidMethod(
                "Method name cannot be empty".to_string(),
            ));
        }

        let injector = self.injector.ok_or_else(|| {
            Error::InvalidMethod(format!("Method '{}' has no IL injector", self.name))
        })?;
        if injector.strong_count() == 0 {
            return Err(Error::InvalidMethod(format!(
                "IL injector of method '{}' was dropped before the method was built",
                self.name
            )));
        }

        let return_type = self.return_type.unwrap_or_else(|| {
            Arc::new(IlType::from_kind(IlTypeKind::Primitive(DataType::NoType)))
        });

        BuilderMethod::new(
            self.declaring_unit,
            self.line,
            self.name,
            self.parameters,
            return_type,
            self.entry_point,
            injector,
            &self.encoder,
        )
    }
}
