//! The resolved-method view of a builder-defined method.
//!
//! A builder-defined method has its body produced by explicit IL construction. It has no
//! declaring class, no bytecode and no exception table; [`BuilderMethod`] therefore answers
//! the [`ResolvedMethod`] queries as a plain, public, static, fully compilable method without
//! exception handlers and without backward branches.
//!
//! # Lifecycle
//!
//! 1. Created once, when the method builder finalizes the signature. The signature is encoded
//!    at construction and never changes afterwards.
//! 2. Queried by the compiler front end while it generates IL ("interpreted" phase).
//! 3. After code generation the entry point is installed exactly once ("compiled" phase).

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, OnceLock, Weak},
};

use log::{debug, warn};

use crate::{
    method::{
        EntryPoint, IlInjector, MethodAccessFlags, MethodModifiers, PersistentIdentifier,
        ResolvedMethod,
    },
    signature::{Signature, SignatureEncoder},
    types::IlTypeRef,
    Error, Result,
};

/// A builder-defined method as seen by the compiler front end.
///
/// Equality, hashing and [`ResolvedMethod::is_same_method`] go through the
/// [`PersistentIdentifier`], the address of the [`IlInjector`] that produced the body. Two
/// methods with identical names and signatures but different injectors are different methods.
///
/// Use [`crate::method::ResolvedMethodBuilder`] to create instances.
pub struct BuilderMethod {
    declaring_unit: String,
    line: String,
    name: String,
    location: String,
    parameters: Vec<IlTypeRef>,
    return_type: IlTypeRef,
    signature: Signature,
    entry_point: OnceLock<EntryPoint>,
    identifier: PersistentIdentifier,
    injector: Weak<dyn IlInjector>,
}

impl BuilderMethod {
    /// Creates the resolved view and encodes its signature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SignatureTooLong`] if the parameter and return types do not fit
    /// `encoder`'s capacity.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        declaring_unit: String,
        line: String,
        name: String,
        parameters: Vec<IlTypeRef>,
        return_type: IlTypeRef,
        entry_point: Option<EntryPoint>,
        injector: Weak<dyn IlInjector>,
        encoder: &SignatureEncoder,
    ) -> Result<Self> {
        let signature = encoder.encode(&parameters, &return_type).inspect_err(|error| {
            warn!("Cannot resolve method '{name}' at {declaring_unit}:{line}: {error}");
        })?;
        debug!("Resolved method '{name}' with signature {signature}");

        let location = format!("{declaring_unit}:{line}");
        // The address stays reserved while the weak reference lives, the injector may not.
        let identifier =
            PersistentIdentifier::from_address(injector.as_ptr().cast::<()>() as usize);

        Ok(BuilderMethod {
            declaring_unit,
            line,
            name,
            location,
            parameters,
            return_type,
            signature,
            entry_point: entry_point.map_or_else(OnceLock::new, OnceLock::from),
            identifier,
            injector,
        })
    }

    /// Installs the address of the compiled code.
    ///
    /// The method moves from the interpreted to the compiled phase; there is no way back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryPointAlreadySet`] if an entry point is already installed. The
    /// installed entry point stays untouched.
    pub fn set_entry_point(&self, entry_point: EntryPoint) -> Result<()> {
        match self.entry_point.set(entry_point) {
            Ok(()) => {
                debug!("Installed entry point {entry_point} for '{}'", self.name);
                Ok(())
            }
            Err(rejected) => {
                warn!(
                    "Rejected entry point {rejected} for '{}', already compiled at {}",
                    self.name,
                    self.entry_point.get().map_or(0, EntryPoint::address)
                );
                Err(Error::EntryPointAlreadySet {
                    method: self.name.clone(),
                })
            }
        }
    }

    /// Returns `"<declaring unit>:<line>"`, the source location of the method.
    #[must_use]
    pub fn location_signature(&self) -> &str {
        &self.location
    }

    /// Returns all parameter types in declaration order.
    #[must_use]
    pub fn parameter_types(&self) -> &[IlTypeRef] {
        &self.parameters
    }

    /// Returns the injector that generated the body, if it is still alive.
    #[must_use]
    pub fn injector(&self) -> Option<Arc<dyn IlInjector>> {
        self.injector.upgrade()
    }
}

impl ResolvedMethod for BuilderMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_unit_name(&self) -> &str {
        &self.declaring_unit
    }

    fn source_line(&self) -> &str {
        &self.line
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn persistent_identifier(&self) -> PersistentIdentifier {
        self.identifier
    }

    fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    fn parameter_type(&self, index: usize) -> Result<&IlTypeRef> {
        self.parameters.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.parameters.len(),
        })
    }

    fn return_type(&self) -> &IlTypeRef {
        &self.return_type
    }

    fn entry_point(&self) -> Option<EntryPoint> {
        self.entry_point.get().copied()
    }

    fn start_address_for_interpreter_of_jitted_method(&self) -> Option<EntryPoint> {
        None
    }

    fn code(&self) -> Option<&[u8]> {
        None
    }

    fn max_bytecode_index(&self) -> u32 {
        0
    }

    fn number_of_temps(&self) -> usize {
        0
    }

    fn number_of_exception_handlers(&self) -> u32 {
        0
    }

    fn local_name(&self, slot: usize) -> Option<String> {
        self.injector.upgrade()?.local_name(slot)
    }

    fn access_flags(&self) -> MethodAccessFlags {
        MethodAccessFlags::PUBLIC
    }

    fn modifiers(&self) -> MethodModifiers {
        MethodModifiers::STATIC
    }

    fn is_compilable(&self) -> bool {
        true
    }

    fn is_non_empty_object_constructor(&self) -> bool {
        false
    }

    fn is_final_in_object(&self) -> bool {
        false
    }

    fn is_subject_to_phase_change(&self) -> bool {
        false
    }

    fn has_backward_branches(&self) -> bool {
        false
    }

    fn is_new_instance_impl_thunk(&self) -> bool {
        false
    }

    fn is_jni_native(&self) -> bool {
        false
    }

    fn is_jit_internal_native(&self) -> bool {
        false
    }
}

impl PartialEq for BuilderMethod {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_method(other)
    }
}

impl Eq for BuilderMethod {}

impl Hash for BuilderMethod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.persistent_identifier().hash(state);
    }
}

impl fmt::Debug for BuilderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderMethod")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("signature", &self.signature)
            .field("entry_point", &self.entry_point.get())
            .field("id", &self.persistent_identifier())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        method::ResolvedMethodBuilder,
        types::{DataType, TypeDictionary},
    };

    struct Injector;

    impl IlInjector for Injector {}

    struct NamedInjector(Vec<&'static str>);

    impl IlInjector for NamedInjector {
        fn local_name(&self, slot: usize) -> Option<String> {
            self.0.get(slot).map(|name| (*name).to_string())
        }
    }

    fn add_method(types: &TypeDictionary, injector: &Arc<Injector>) -> BuilderMethod {
        ResolvedMethodBuilder::new("add")
            .declaring_unit("math.cpp")
            .line("42")
            .parameter(types.int32())
            .parameter(types.int32())
            .returns(types.int32())
            .injector(injector)
            .build()
            .unwrap()
    }

    #[test]
    fn test_identity_labels() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);

        assert_eq!(method.name(), "add");
        assert_eq!(method.external_name(), "add");
        assert_eq!(method.declaring_unit_name(), "math.cpp");
        assert_eq!(method.source_line(), "42");
        assert_eq!(method.location_signature(), "math.cpp:42");
        assert_eq!(method.name_length(), 3);
        assert_eq!(method.declaring_unit_name_length(), 8);
    }

    #[test]
    fn test_signature() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);

        assert_eq!(method.signature(), "(II)I");
        assert_eq!(method.signature_length(), 5);
    }

    #[test]
    fn test_parameters() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);

        assert_eq!(method.parameter_count(), 2);
        assert_eq!(method.number_of_parameter_slots(), 2);
        assert!(Arc::ptr_eq(method.parameter_type(1).unwrap(), &types.int32()));
        assert_eq!(method.parameter_data_type(0), Ok(DataType::Int32));
        assert_eq!(method.parameter_type_signature(0), Ok("I".to_string()));
        assert_eq!(method.return_data_type(), DataType::Int32);
        assert_eq!(method.parameter_types().len(), 2);
    }

    #[test]
    fn test_parameter_out_of_range() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);

        assert_eq!(
            method.parameter_type(2).map(|_| ()),
            Err(Error::IndexOutOfRange { index: 2, count: 2 })
        );
        assert!(method.parameter_data_type(7).is_err());
        assert!(method.parameter_type_signature(2).is_err());
    }

    #[test]
    fn test_entry_point_transition() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);
        let entry = EntryPoint::new(0x4000).unwrap();

        assert!(method.is_interpreted());
        assert_eq!(method.entry_point(), None);

        method.set_entry_point(entry).unwrap();
        assert!(!method.is_interpreted());
        assert_eq!(method.entry_point(), Some(entry));
        assert_eq!(method.start_address_for_jitted_method(), Some(entry));
        assert_eq!(method.start_address_for_interpreter_of_jitted_method(), None);
    }

    #[test]
    fn test_entry_point_set_twice() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);
        let first = EntryPoint::new(0x4000).unwrap();
        let second = EntryPoint::new(0x8000).unwrap();

        method.set_entry_point(first).unwrap();
        assert_eq!(
            method.set_entry_point(second),
            Err(Error::EntryPointAlreadySet {
                method: "add".to_string()
            })
        );
        assert_eq!(method.entry_point(), Some(first));
    }

    #[test]
    fn test_capabilities() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);

        assert!(!method.is_constructor());
        assert!(!method.is_non_empty_object_constructor());
        assert!(!method.is_final_in_object());
        assert!(method.is_static());
        assert!(!method.is_abstract());
        assert!(method.is_compilable());
        assert!(!method.is_native());
        assert!(!method.is_synchronized());
        assert!(!method.is_private());
        assert!(!method.is_protected());
        assert!(method.is_public());
        assert!(!method.is_final());
        assert!(!method.is_subject_to_phase_change());
        assert!(!method.has_backward_branches());
        assert!(!method.is_new_instance_impl_thunk());
        assert!(!method.is_jni_native());
        assert!(!method.is_jit_internal_native());
        assert_eq!(method.number_of_exception_handlers(), 0);
        assert_eq!(method.number_of_temps(), 0);
        assert_eq!(method.max_bytecode_index(), 0);
        assert!(method.code().is_none());
    }

    #[test]
    fn test_identity_is_injector_address() {
        let types = TypeDictionary::new();
        let first_injector = Arc::new(Injector);
        let second_injector = Arc::new(Injector);

        let first = add_method(&types, &first_injector);
        let again = add_method(&types, &first_injector);
        let second = add_method(&types, &second_injector);

        assert_eq!(first.signature(), second.signature());
        assert_ne!(first, second);
        assert!(!first.is_same_method(&second));
        assert_eq!(first, again);
        assert_eq!(
            first.persistent_identifier().value(),
            Arc::as_ptr(&first_injector) as *const () as usize
        );
    }

    #[test]
    fn test_identity_survives_injector_drop() {
        let types = TypeDictionary::new();
        let injector = Arc::new(Injector);
        let method = add_method(&types, &injector);
        let identifier = method.persistent_identifier();

        drop(injector);
        assert!(method.injector().is_none());
        assert_eq!(method.persistent_identifier(), identifier);
        assert_eq!(method.local_name(0), None);
    }

    #[test]
    fn test_local_name_from_injector() {
        let types = TypeDictionary::new();
        let injector = Arc::new(NamedInjector(vec!["lhs", "rhs"]));
        let method = ResolvedMethodBuilder::new("add")
            .parameters([types.int32(), types.int32()])
            .returns(types.int32())
            .injector(&injector)
            .build()
            .unwrap();

        assert_eq!(method.local_name(1), Some("rhs".to_string()));
        assert_eq!(method.local_name(2), None);
        assert!(method.injector().is_some());
    }
}
