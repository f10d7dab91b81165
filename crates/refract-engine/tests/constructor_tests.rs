use std::sync::Arc;

use refract_engine::reflect::{
    ConstructorWrapper, Construct, CtorWrapper, DefaultedConstructor, FactoryWrapper, Ref,
};
use refract_engine::{arguments, default_arguments, Argument, Policy, Type, Variant};

#[derive(Debug, Clone, PartialEq, Default)]
struct Account {
    owner: String,
    balance: i64,
    frozen: bool,
}

impl Construct<(String, i64)> for Account {
    fn construct((owner, balance): (String, i64)) -> Self {
        Account {
            owner,
            balance,
            frozen: false,
        }
    }
}

impl Construct<(String, i64, bool)> for Account {
    fn construct((owner, balance, frozen): (String, i64, bool)) -> Self {
        Account {
            owner,
            balance,
            frozen,
        }
    }
}

impl Construct<(Ref<Account>,)> for Account {
    fn construct((other,): (Ref<Account>,)) -> Self {
        (*other).clone()
    }
}

fn open_account(owner: String, balance: i64) -> Account {
    Account {
        owner,
        balance,
        frozen: false,
    }
}

fn owner_and_balance() -> Vec<Variant> {
    vec![Variant::new(String::from("ada")), Variant::new(100_i64)]
}

// ============================================================================
// Arity Tests
// ============================================================================

#[test]
fn test_exact_arity_dispatches() {
    let ctor = CtorWrapper::<Account, (String, i64)>::new(Policy::AsObject);
    let values = owner_and_balance();
    let account = ctor.invoke_variadic(&arguments(&values));
    assert_eq!(
        account.convert::<Account>(),
        Some(Account {
            owner: "ada".to_string(),
            balance: 100,
            frozen: false
        })
    );
}

#[test]
fn test_every_other_arity_is_empty() {
    let ctor = CtorWrapper::<Account, (String, i64)>::new(Policy::AsObject);
    let mut values = owner_and_balance();
    values.push(Variant::new(true));

    for count in 0..=values.len() {
        let result = ctor.invoke_variadic(&arguments(&values[..count]));
        assert_eq!(result.is_valid(), count == 2, "count = {}", count);
    }
}

#[test]
fn test_fixed_and_variadic_agree() {
    let ctor = CtorWrapper::<Account, (String, i64, bool)>::new(Policy::AsObject);
    let values = vec![
        Variant::new(String::from("lin")),
        Variant::new(5_i64),
        Variant::new(true),
    ];
    let args = arguments(&values);
    let fixed = ctor.invoke3(args[0], args[1], args[2]);
    let variadic = ctor.invoke_variadic(&args);
    assert_eq!(fixed.convert::<Account>(), variadic.convert::<Account>());
    assert!(fixed.is_valid());
}

#[test]
fn test_type_mismatch_is_empty() {
    let ctor = CtorWrapper::<Account, (String, i64)>::new(Policy::AsObject);
    let values = vec![Variant::new(String::from("ada")), Variant::new(100_i32)];
    assert!(!ctor.invoke_variadic(&arguments(&values)).is_valid());

    let swapped = vec![Variant::new(100_i64), Variant::new(String::from("ada"))];
    assert!(!ctor.invoke_variadic(&arguments(&swapped)).is_valid());
}

#[test]
fn test_empty_argument_is_rejected() {
    let ctor = CtorWrapper::<Account, (String, i64)>::new(Policy::AsObject);
    let values = vec![Variant::new(String::from("ada")), Variant::empty()];
    assert!(!ctor.invoke_variadic(&arguments(&values)).is_valid());
}

// ============================================================================
// Metadata Tests
// ============================================================================

#[test]
fn test_zero_parameter_metadata_is_empty() {
    let ctor = CtorWrapper::<Account, ()>::new(Policy::AsObject);
    assert!(ctor.parameter_types().is_empty());
    assert!(ctor.is_reference().is_empty());
    assert!(ctor.is_const().is_empty());
    assert_eq!(ctor.invoke().convert::<Account>(), Some(Account::default()));
}

#[test]
fn test_metadata_is_idempotent() {
    let ctor = CtorWrapper::<Account, (String, i64)>::new(Policy::AsArc);
    let first = (ctor.instantiated_type(), ctor.declaring_type());
    for _ in 0..10 {
        assert_eq!((ctor.instantiated_type(), ctor.declaring_type()), first);
    }
    assert_eq!(first.0, Type::of::<Arc<Account>>());
    assert_eq!(first.1, Type::of::<Account>());
}

#[test]
fn test_reference_parameter_metadata() {
    let ctor = CtorWrapper::<Account, (Ref<Account>,)>::new(Policy::AsObject);
    assert_eq!(ctor.parameter_types(), vec![Type::of::<Account>()]);
    assert_eq!(ctor.is_reference(), vec![true]);
    assert_eq!(ctor.is_const(), vec![true]);

    let source = Variant::new(Account {
        owner: "grace".to_string(),
        balance: 1,
        frozen: true,
    });
    let copy = ctor.invoke1(Argument::new(&source));
    assert_eq!(copy.convert::<Account>(), source.convert::<Account>());
}

#[test]
fn test_reference_parameter_accepts_arc_policy_result() {
    let shared = CtorWrapper::<Account, (String, i64)>::new(Policy::AsArc);
    let values = owner_and_balance();
    let arc = shared.invoke_variadic(&arguments(&values));
    assert!(arc.is_type::<Arc<Account>>());

    let copy_ctor = CtorWrapper::<Account, (Ref<Account>,)>::new(Policy::AsObject);
    let copy = copy_ctor.invoke1(Argument::new(&arc));
    assert_eq!(copy.convert::<Account>().map(|a| a.balance), Some(100));
}

// ============================================================================
// Factory Tests
// ============================================================================

#[test]
fn test_factory_and_direct_are_equivalent() {
    let direct: Box<dyn ConstructorWrapper> =
        Box::new(CtorWrapper::<Account, (String, i64)>::new(Policy::AsObject));
    let factory: Box<dyn ConstructorWrapper> =
        Box::new(FactoryWrapper::<Account, _, (String, i64)>::new(open_account, Policy::AsObject));

    assert_eq!(direct.parameter_types(), factory.parameter_types());
    assert_eq!(direct.is_reference(), factory.is_reference());
    assert_eq!(direct.is_const(), factory.is_const());
    assert_eq!(direct.instantiated_type(), factory.instantiated_type());
    assert_eq!(direct.arity(), factory.arity());

    let values = owner_and_balance();
    let args = arguments(&values);
    let a = direct.invoke_variadic(&args);
    let b = factory.invoke_variadic(&args);
    assert_eq!(a.get_type(), b.get_type());
    assert_eq!(a.convert::<Account>(), b.convert::<Account>());
}

#[test]
fn test_factory_closure_captures() {
    let bonus = 25_i64;
    let factory = FactoryWrapper::<Account, _, (String,)>::new(
        move |owner: String| Account {
            owner,
            balance: bonus,
            frozen: false,
        },
        Policy::AsBox,
    );
    let name = Variant::new(String::from("joan"));
    let account = factory.invoke1(Argument::new(&name));
    assert!(account.is_type::<Box<Account>>());
    assert_eq!(account.get_value::<Box<Account>>().map(|a| a.balance), Some(25));
}

// ============================================================================
// Fixed Arity Tests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
struct Record {
    fields: Vec<i32>,
}

impl Construct<(i32, i32, i32, i32)> for Record {
    fn construct((a, b, c, d): (i32, i32, i32, i32)) -> Self {
        Record {
            fields: vec![a, b, c, d],
        }
    }
}

impl Construct<(i32, i32, i32, i32, i32)> for Record {
    fn construct((a, b, c, d, e): (i32, i32, i32, i32, i32)) -> Self {
        Record {
            fields: vec![a, b, c, d, e],
        }
    }
}

impl Construct<(i32, i32, i32, i32, i32, i32)> for Record {
    fn construct((a, b, c, d, e, f): (i32, i32, i32, i32, i32, i32)) -> Self {
        Record {
            fields: vec![a, b, c, d, e, f],
        }
    }
}

fn record6(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> Record {
    Record {
        fields: vec![a, b, c, d, e, f],
    }
}

fn numbers(count: i32) -> Vec<Variant> {
    (1..=count).map(Variant::new).collect()
}

#[test]
fn test_six_parameters_fixed_and_variadic() {
    let direct: Box<dyn ConstructorWrapper> = Box::new(CtorWrapper::<
        Record,
        (i32, i32, i32, i32, i32, i32),
    >::new(Policy::AsObject));
    let factory: Box<dyn ConstructorWrapper> = Box::new(FactoryWrapper::<
        Record,
        _,
        (i32, i32, i32, i32, i32, i32),
    >::new(record6, Policy::AsObject));

    let values = numbers(6);
    let a = arguments(&values);
    let expected = Some(Record {
        fields: vec![1, 2, 3, 4, 5, 6],
    });

    for ctor in [&direct, &factory] {
        assert_eq!(ctor.arity(), 6);
        let fixed = ctor.invoke6(a[0], a[1], a[2], a[3], a[4], a[5]);
        let variadic = ctor.invoke_variadic(&a);
        assert_eq!(fixed.convert::<Record>(), expected);
        assert_eq!(variadic.convert::<Record>(), expected);
        assert!(!ctor.invoke5(a[0], a[1], a[2], a[3], a[4]).is_valid());
    }
}

#[test]
fn test_four_and_five_parameters_fixed() {
    let values = numbers(5);
    let a = arguments(&values);

    let four = CtorWrapper::<Record, (i32, i32, i32, i32)>::new(Policy::AsObject);
    let fixed = four.invoke4(a[0], a[1], a[2], a[3]);
    assert_eq!(fixed.convert::<Record>(), four.invoke_variadic(&a[..4]).convert::<Record>());
    assert_eq!(fixed.convert::<Record>().map(|r| r.fields), Some(vec![1, 2, 3, 4]));

    let five = CtorWrapper::<Record, (i32, i32, i32, i32, i32)>::new(Policy::AsObject);
    let fixed = five.invoke5(a[0], a[1], a[2], a[3], a[4]);
    assert_eq!(fixed.convert::<Record>(), five.invoke_variadic(&a).convert::<Record>());
    assert_eq!(fixed.convert::<Record>().map(|r| r.fields.len()), Some(5));
}

#[test]
fn test_factory_fixed_entry_points() {
    let factory = FactoryWrapper::<Account, _, (String, i64)>::new(open_account, Policy::AsObject);
    let values = owner_and_balance();
    let a = arguments(&values);
    let fixed = factory.invoke2(a[0], a[1]);
    assert_eq!(fixed.convert::<Account>(), factory.invoke_variadic(&a).convert::<Account>());
    assert_eq!(fixed.convert::<Account>().map(|acc| acc.balance), Some(100));
}

// ============================================================================
// Default Argument Tests
// ============================================================================

#[test]
fn test_defaulted_constructor_fills_trailing() {
    let inner = Box::new(CtorWrapper::<Account, (String, i64, bool)>::new(Policy::AsObject));
    let ctor = DefaultedConstructor::new(inner, default_arguments((0_i64, false)));

    let name = Variant::new(String::from("alan"));
    let balance = Variant::new(9_i64);
    let frozen = Variant::new(true);

    let all = ctor.invoke3(
        Argument::new(&name),
        Argument::new(&balance),
        Argument::new(&frozen),
    );
    assert_eq!(all.convert::<Account>().map(|a| a.frozen), Some(true));

    let one_default = ctor.invoke2(Argument::new(&name), Argument::new(&balance));
    assert_eq!(
        one_default.convert::<Account>(),
        Some(Account {
            owner: "alan".to_string(),
            balance: 9,
            frozen: false
        })
    );

    let two_defaults = ctor.invoke1(Argument::new(&name));
    assert_eq!(two_defaults.convert::<Account>().map(|a| a.balance), Some(0));

    // the shortfall may not exceed the bundle
    assert!(!ctor.invoke().is_valid());
}

#[test]
fn test_defaulted_constructor_keeps_metadata() {
    let inner = Box::new(CtorWrapper::<Account, (String, i64, bool)>::new(Policy::AsBox));
    let ctor = DefaultedConstructor::new(inner, default_arguments((false,)));
    assert_eq!(ctor.arity(), 3);
    assert_eq!(ctor.min_arity(), 2);
    assert_eq!(ctor.policy(), Policy::AsBox);
    assert_eq!(ctor.declaring_type(), Type::of::<Account>());
    assert_eq!(ctor.instantiated_type(), Type::of::<Box<Account>>());
    assert_eq!(ctor.parameter_types().len(), 3);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[test]
fn test_concurrent_invocation() {
    let ctor = CtorWrapper::<Account, (String, i64)>::new(Policy::AsObject);

    std::thread::scope(|s| {
        for i in 0..8_i64 {
            let ctor = &ctor;
            s.spawn(move || {
                let values = vec![Variant::new(format!("user{}", i)), Variant::new(i)];
                for _ in 0..100 {
                    let account = ctor.invoke_variadic(&arguments(&values));
                    assert_eq!(account.convert::<Account>().map(|a| a.balance), Some(i));
                }
            });
        }
    });
}
