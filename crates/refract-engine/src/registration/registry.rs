//! Class and constructor registry
//!
//! The registry owns every registered [`ConstructorWrapper`], keyed by the
//! declaring class. Registration is where default-argument bundles are
//! resolved: the argument list given to [`ClassBuilder::constructor`] is split
//! into plain values, metadata and an optional bundle, and the bundle (when
//! it fits the constructor's trailing parameters) is attached through a
//! [`DefaultedConstructor`].

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use refract_sdk::{Argument, Policy, Type, Variant};
use rustc_hash::FxHashMap;

use super::config::{MultipleDefaultArgs, RegistryConfig};
use super::error::{RegistrationError, RegistrationResult};
use crate::reflect::{
    count_default_args, get_default_args, has_default_types, locate_bundle, Callable, Construct,
    ConstructorWrapper, CtorWrapper, DefaultedConstructor, FactoryWrapper, ParamList,
    RegistrationArg, Signature,
};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// One registered constructor with its registration-time data
pub struct ConstructorEntry {
    wrapper: Box<dyn ConstructorWrapper>,
    signature: Signature,
    values: Vec<Variant>,
    metadata: FxHashMap<String, Variant>,
}

impl ConstructorEntry {
    /// The type-erased constructor
    pub fn wrapper(&self) -> &dyn ConstructorWrapper {
        self.wrapper.as_ref()
    }

    /// Normalized parameter signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Plain values given at registration
    pub fn values(&self) -> &[Variant] {
        &self.values
    }

    /// Metadata value registered under `key`
    pub fn metadata(&self, key: &str) -> Option<&Variant> {
        self.metadata.get(key)
    }

    /// Invoke the constructor
    pub fn invoke(&self, args: &[Argument<'_>]) -> Variant {
        self.wrapper.invoke_variadic(args)
    }
}

impl fmt::Debug for ConstructorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorEntry")
            .field("signature", &self.signature.to_string())
            .field("policy", &self.wrapper.policy())
            .field("defaults", &self.wrapper.default_args().map_or(0, |d| d.len()))
            .finish()
    }
}

#[derive(Debug)]
struct ClassEntry {
    name: String,
    constructors: Vec<Arc<ConstructorEntry>>,
}

impl ClassEntry {
    fn new(name: String) -> Self {
        Self {
            name,
            constructors: Vec::new(),
        }
    }
}

/// Thread-safe class registry
pub struct Registry {
    config: RegistryConfig,
    classes: RwLock<FxHashMap<Type, ClassEntry>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("classes", &self.len())
            .finish()
    }
}

impl Registry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            classes: RwLock::new(FxHashMap::default()),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Active configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Start registering constructors of `T` under `name`.
    ///
    /// A class registered twice keeps its first name and accumulates
    /// constructors.
    pub fn class<T: Send + Sync + 'static>(&self, name: impl Into<String>) -> ClassBuilder<'_, T> {
        let name = name.into();
        let name = self
            .classes
            .write()
            .entry(Type::of::<T>())
            .or_insert_with(|| ClassEntry::new(name))
            .name
            .clone();
        ClassBuilder {
            registry: self,
            name,
            policy: self.config.default_policy,
            _marker: PhantomData,
        }
    }

    /// Check whether `ty` is registered
    pub fn is_registered(&self, ty: Type) -> bool {
        self.classes.read().contains_key(&ty)
    }

    /// Registered name of `ty`
    pub fn class_name(&self, ty: Type) -> Option<String> {
        self.classes.read().get(&ty).map(|entry| entry.name.clone())
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    /// Check if no class is registered
    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }

    /// Constructors of `ty` in registration order
    pub fn constructors(&self, ty: Type) -> Vec<Arc<ConstructorEntry>> {
        self.classes
            .read()
            .get(&ty)
            .map(|entry| entry.constructors.clone())
            .unwrap_or_default()
    }

    /// Construct a `ty` from `args`.
    ///
    /// Tries each constructor in registration order and returns the first
    /// non-empty result, or the empty variant when none accepts the arguments.
    pub fn create(&self, ty: Type, args: &[Argument<'_>]) -> Variant {
        // constructors may themselves call into the registry
        let constructors = self.constructors(ty);
        for entry in &constructors {
            let value = entry.invoke(args);
            if value.is_valid() {
                return value;
            }
        }
        if self.config.log_rejected_invocations {
            tracing::debug!(
                class = %ty,
                args = args.len(),
                candidates = constructors.len(),
                "no constructor accepted the arguments"
            );
        }
        Variant::empty()
    }

    /// Metadata registered under `key` on the `index`th constructor of `ty`
    pub fn get_metadata(&self, ty: Type, index: usize, key: &str) -> Option<Variant> {
        let classes = self.classes.read();
        let entry = classes.get(&ty)?.constructors.get(index)?;
        entry.metadata(key).cloned()
    }

    fn add_constructor(
        &self,
        class: &str,
        wrapper: Box<dyn ConstructorWrapper>,
        signature: Signature,
        args: Vec<RegistrationArg>,
    ) -> RegistrationResult<()> {
        let bundles = count_default_args(&args);
        if bundles > 1 {
            match self.config.multiple_default_args {
                MultipleDefaultArgs::Reject => {
                    return Err(RegistrationError::MultipleDefaultArgs {
                        class: class.to_string(),
                        count: bundles,
                    });
                }
                MultipleDefaultArgs::FirstMatch => {
                    tracing::warn!(
                        class,
                        count = bundles,
                        "multiple default argument bundles, using the first"
                    );
                }
            }
        }

        let wrapper: Box<dyn ConstructorWrapper> = match locate_bundle(&args) {
            None => wrapper,
            Some(bundle) => {
                if !has_default_types(&signature, &args) {
                    return Err(RegistrationError::DefaultArgsMismatch {
                        class: class.to_string(),
                        signature: signature.to_string(),
                        bundle: bundle.to_string(),
                    });
                }
                Box::new(DefaultedConstructor::new(
                    wrapper,
                    get_default_args(&signature, &args),
                ))
            }
        };

        let mut values = Vec::new();
        let mut metadata = FxHashMap::default();
        for arg in args {
            match arg {
                RegistrationArg::Value(value) => values.push(value),
                RegistrationArg::Metadata { key, value } => {
                    metadata.insert(key, value);
                }
                RegistrationArg::Defaults(_) => {}
            }
        }

        tracing::debug!(
            class,
            signature = %signature,
            policy = wrapper.policy().name(),
            defaults = wrapper.default_args().map_or(0, |d| d.len()),
            "registered constructor"
        );

        let declaring = wrapper.declaring_type();
        let entry = Arc::new(ConstructorEntry {
            wrapper,
            signature,
            values,
            metadata,
        });
        self.classes
            .write()
            .entry(declaring)
            .or_insert_with(|| ClassEntry::new(class.to_string()))
            .constructors
            .push(entry);
        Ok(())
    }
}

/// Builder returned by [`Registry::class`]
pub struct ClassBuilder<'r, T> {
    registry: &'r Registry,
    name: String,
    policy: Policy,
    _marker: PhantomData<fn() -> T>,
}

impl<'r, T: Send + Sync + 'static> ClassBuilder<'r, T> {
    /// Policy for the constructors registered next
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Register direct construction from the parameter tuple `Args`
    pub fn constructor<Args>(self, args: Vec<RegistrationArg>) -> RegistrationResult<Self>
    where
        T: Construct<Args>,
        Args: ParamList,
    {
        let wrapper = CtorWrapper::<T, Args>::new(self.policy);
        let signature = wrapper.signature().clone();
        self.registry
            .add_constructor(&self.name, Box::new(wrapper), signature, args)?;
        Ok(self)
    }

    /// Register a factory function
    pub fn constructor_fn<F, Args>(self, creator: F, args: Vec<RegistrationArg>) -> RegistrationResult<Self>
    where
        F: Callable<Args>,
        Args: 'static,
    {
        let wrapper = FactoryWrapper::<T, F, Args>::new(creator, self.policy);
        let signature = wrapper.signature().clone();
        self.registry
            .add_constructor(&self.name, Box::new(wrapper), signature, args)?;
        Ok(self)
    }

    /// Registered class name
    pub fn name(&self) -> &str {
        &self.name
    }
}
