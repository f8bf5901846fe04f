use crate::{
    method::{EntryPoint, MethodAccessFlags, MethodModifiers, PersistentIdentifier},
    signature::Signature,
    types::{DataType, IlTypeRef},
    Result,
};

/// The capability interface a compiler front end queries while generating IL, building
/// symbol-reference tables and making optimization decisions.
///
/// The interface is shaped after resolved methods of object-oriented, bytecode-based
/// languages. Implementations for other kinds of methods answer the queries that do not apply
/// to them with fixed values; optimization and verification code trusts those answers, so an
/// implementation must never claim a property it cannot guarantee.
///
/// Queries that follow from [`ResolvedMethod::access_flags`] and
/// [`ResolvedMethod::modifiers`] are provided; everything else is answered by the
/// implementation.
pub trait ResolvedMethod {
    // Identity

    /// Returns the method name
    fn name(&self) -> &str;

    /// Returns the label of the unit declaring the method, e.g. a source file name
    fn declaring_unit_name(&self) -> &str;

    /// Returns the source-line label of the method
    fn source_line(&self) -> &str;

    /// Returns the encoded signature of the method
    fn signature(&self) -> &Signature;

    /// Returns the identity used by [`ResolvedMethod::is_same_method`]
    fn persistent_identifier(&self) -> PersistentIdentifier;

    // Parameters and return type

    /// Returns the number of declared parameters
    fn parameter_count(&self) -> usize;

    /// Returns the type of the parameter at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IndexOutOfRange`] if `index >= parameter_count()`.
    fn parameter_type(&self, index: usize) -> Result<&IlTypeRef>;

    /// Returns the return type
    fn return_type(&self) -> &IlTypeRef;

    // Compiled code

    /// Returns the address of the compiled code, `None` until compilation completed
    fn entry_point(&self) -> Option<EntryPoint>;

    /// Returns the entry point used when calling from interpreted code
    fn start_address_for_interpreter_of_jitted_method(&self) -> Option<EntryPoint>;

    /// Returns the bytecode of the method, if it has any
    fn code(&self) -> Option<&[u8]>;

    /// Returns the highest bytecode index of the method
    fn max_bytecode_index(&self) -> u32;

    /// Returns the number of temporaries beyond the parameter slots
    fn number_of_temps(&self) -> usize;

    /// Returns the number of exception handlers of the method
    fn number_of_exception_handlers(&self) -> u32;

    /// Returns the name of the parameter or local variable in `slot`, if known
    fn local_name(&self, slot: usize) -> Option<String>;

    // Attributes

    /// Returns the access flags of the method
    fn access_flags(&self) -> MethodAccessFlags;

    /// Returns the modifiers of the method
    fn modifiers(&self) -> MethodModifiers;

    /// Returns true if the method can be compiled at all
    fn is_compilable(&self) -> bool;

    /// Returns true if a constructor does more than calling the base constructor
    fn is_non_empty_object_constructor(&self) -> bool;

    /// Returns true if the method is final within the root object type
    fn is_final_in_object(&self) -> bool;

    /// Returns true if the method behaviour can change between execution phases
    fn is_subject_to_phase_change(&self) -> bool;

    /// Returns true if the method body contains a loop
    fn has_backward_branches(&self) -> bool;

    /// Returns true for reflection instance-creation thunks
    fn is_new_instance_impl_thunk(&self) -> bool;

    /// Returns true for natives bound through a foreign-function interface
    fn is_jni_native(&self) -> bool;

    /// Returns true for natives implemented by the compiler itself
    fn is_jit_internal_native(&self) -> bool;

    /// Returns true while no compiled code is installed
    fn is_interpreted(&self) -> bool {
        self.entry_point().is_none()
    }

    /// Returns the entry point of the compiled code
    fn start_address_for_jitted_method(&self) -> Option<EntryPoint> {
        self.entry_point()
    }

    /// Returns true if `other` is the same method, judged by persistent identifier only.
    fn is_same_method(&self, other: &dyn ResolvedMethod) -> bool {
        self.persistent_identifier() == other.persistent_identifier()
    }

    /// Returns the external (linkage) name of the method
    fn external_name(&self) -> &str {
        self.name()
    }

    /// Returns the length of [`ResolvedMethod::name`] in bytes
    fn name_length(&self) -> usize {
        self.name().len()
    }

    /// Returns the length of [`ResolvedMethod::declaring_unit_name`] in bytes
    fn declaring_unit_name_length(&self) -> usize {
        self.declaring_unit_name().len()
    }

    /// Returns the length of [`ResolvedMethod::signature`] in bytes
    fn signature_length(&self) -> usize {
        self.signature().len()
    }

    /// Returns the number of parameter slots, one per parameter
    fn number_of_parameter_slots(&self) -> usize {
        self.parameter_count()
    }

    /// Returns the primitive kind of the parameter in `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IndexOutOfRange`] if `slot` is not a parameter slot.
    fn parameter_data_type(&self, slot: usize) -> Result<DataType> {
        Ok(self.parameter_type(slot)?.data_type())
    }

    /// Returns the primitive kind of the return type
    fn return_data_type(&self) -> DataType {
        self.return_type().data_type()
    }

    /// Returns the signature code of the parameter at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IndexOutOfRange`] if `index` is not a parameter index.
    fn parameter_type_signature(&self, index: usize) -> Result<String> {
        Ok(self.parameter_type(index)?.signature_name())
    }

    /// Returns true for public methods
    fn is_public(&self) -> bool {
        self.access_flags().contains(MethodAccessFlags::PUBLIC)
    }

    /// Returns true for private methods
    fn is_private(&self) -> bool {
        self.access_flags().contains(MethodAccessFlags::PRIVATE)
    }

    /// Returns true for protected methods
    fn is_protected(&self) -> bool {
        self.access_flags().contains(MethodAccessFlags::PROTECTED)
    }

    /// Returns true for static methods
    fn is_static(&self) -> bool {
        self.modifiers().contains(MethodModifiers::STATIC)
    }

    /// Returns true for final methods
    fn is_final(&self) -> bool {
        self.modifiers().contains(MethodModifiers::FINAL)
    }

    /// Returns true for abstract methods
    fn is_abstract(&self) -> bool {
        self.modifiers().contains(MethodModifiers::ABSTRACT)
    }

    /// Returns true for synchronized methods
    fn is_synchronized(&self) -> bool {
        self.modifiers().contains(MethodModifiers::SYNCHRONIZED)
    }

    /// Returns true for native methods
    fn is_native(&self) -> bool {
        self.modifiers().contains(MethodModifiers::NATIVE)
    }

    /// Returns true for constructors
    fn is_constructor(&self) -> bool {
        self.modifiers().contains(MethodModifiers::CONSTRUCTOR)
    }
}
