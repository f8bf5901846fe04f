/// The object that generates the IL of a builder-defined method.
///
/// A resolved method keeps a non-owning reference to its injector. The address of the
/// injector is the method's [`crate::method::PersistentIdentifier`], so one injector must
/// stand for exactly one method.
pub trait IlInjector {
    /// Returns the source-level name of the parameter or local variable in `slot`.
    ///
    /// The default knows no names.
    fn local_name(&self, _slot: usize) -> Option<String> {
        None
    }
}
