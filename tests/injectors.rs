use lazy_inject::{register, register_named, use_custom_container, use_default_container, Container, Inject, InjectId, SafeInject};
use std::sync::Arc;

trait First: Send + Sync {
    fn play(&self) -> &'static str;
}

trait Third: Send + Sync {
    fn first(&self) -> &Arc<dyn First>;
    fn play(&self) -> &'static str;
}

struct TestA;
struct TestB;

impl First for TestA {
    fn play(&self) -> &'static str {
        "Test A"
    }
}

impl First for TestB {
    fn play(&self) -> &'static str {
        "Test B"
    }
}

struct TestD(Arc<dyn First>);
struct TestE(Arc<dyn First>);

impl Third for TestD {
    fn first(&self) -> &Arc<dyn First> {
        &self.0
    }

    fn play(&self) -> &'static str {
        "Test D"
    }
}

impl Third for TestE {
    fn first(&self) -> &Arc<dyn First> {
        &self.0
    }

    fn play(&self) -> &'static str {
        "Test E"
    }
}

#[derive(Clone, Copy)]
enum ComponentType {
    FirstType,
    SecondType,
}

impl InjectId for ComponentType {
    fn inject_id(&self) -> &str {
        match self {
            ComponentType::FirstType => "firstType",
            ComponentType::SecondType => "secondType",
        }
    }
}

// The process-wide registry is shared by every test in this binary, so the whole flow lives in one test
#[test]
fn test_injectors_flow() {
    let test_a = Inject::<dyn First>::named(ComponentType::FirstType);
    let test_b = Inject::<dyn First>::named(ComponentType::SecondType);
    let unnamed = Inject::<dyn First>::new();

    register_named::<dyn First, _>(ComponentType::FirstType, || Arc::new(TestA));
    register_named::<dyn First, _>(ComponentType::SecondType, || Arc::new(TestB));

    assert_eq!(test_a.value().unwrap().play(), "Test A");
    assert_eq!(test_b.value().unwrap().play(), "Test B");
    assert_eq!(test_a.name(), Some("firstType"));
    assert_eq!(test_b.name(), Some("secondType"));

    // Factories resolve their own dependencies from the active container
    register_named::<dyn Third, _>("testD", || {
        Arc::new(TestD(Inject::<dyn First>::named(ComponentType::FirstType).value().unwrap()))
    });
    let test_d = Inject::<dyn Third>::named("testD");
    assert_eq!(test_d.value().unwrap().play(), "Test D");
    assert_eq!(test_d.value().unwrap().first().play(), "Test A");
    assert_eq!(test_d.name(), Some("testD"));

    let test_e = SafeInject::<dyn Third>::named("testE");
    assert!(test_e.value().is_none());

    register_named::<dyn Third, _>("testE", {
        let first = test_a.value().unwrap();
        move || Arc::new(TestE(first.clone()))
    });
    assert_eq!(test_e.try_resolve_now().unwrap().play(), "Test E");
    assert!(test_e.value().is_none());
    assert!(SafeInject::<dyn Third>::named("testE").value().is_some());

    // The container is looked up on first access, not on construction
    let custom = Container::new();
    let switched = Inject::<dyn First>::new();
    use_custom_container(custom);
    register::<dyn First, _>(|| Arc::new(TestB));
    assert_eq!(switched.value().unwrap().play(), "Test B");
    use_default_container();

    let err = unnamed.value().err().unwrap();
    assert_eq!(err.service_type_name(), "First");
    assert_eq!(err.attempted_name(), None);
    assert_eq!(switched.value().unwrap().play(), "Test B");
}
