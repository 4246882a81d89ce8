use super::*;
use crate::builtins;
use chartsup_core::ModuleName;

#[test]
fn unregistered_name_loads_nothing() {
    let registry = StaticRegistry::new();
    assert!(!registry.contains("uptime"));
    assert!(registry.load(&ModuleName::new("uptime")).is_none());
}

#[test]
fn registered_name_loads_a_module_with_matching_name() {
    let mut registry = StaticRegistry::new();
    builtins::register_all(&mut registry);

    assert!(registry.contains("uptime"));
    let module = registry.load(&ModuleName::new("uptime")).expect("load");
    assert_eq!(module.name().as_str(), "uptime");
}

#[test]
fn re_registering_a_name_replaces_the_factory() {
    let mut registry = StaticRegistry::new();
    registry.register("dup", |_name| builtins::uptime::UptimeModule::new());
    registry.register("dup", |name| builtins::uptime::UptimeModule::new_named(name));

    let module = registry.load(&ModuleName::new("dup")).expect("load");
    assert_eq!(module.name().as_str(), "dup");
}
