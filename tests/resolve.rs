//! Descriptor resolution against in-memory loaders

mod helper;

use rstest::rstest;

use helper::StaticLoader;
use meta_descriptor::config::MetaConfig;
use meta_descriptor::meta::{FALLBACK_VERSION, MetaResolver, read_meta_descriptor};

#[test]
fn resolve_reads_framework_and_service_versions() {
    let loader = StaticLoader::new()
        .with_properties("apolloVersion=1.2.3\n")
        .with_manifest("service.jar", "Implementation-Version: 4.5.6\n");

    let meta = read_meta_descriptor("ping", &loader);

    assert_eq!(meta.descriptor().service_name(), "ping");
    assert_eq!(meta.descriptor().service_version(), "4.5.6");
    assert_eq!(meta.framework_version(), "1.2.3");
}

#[test]
fn resolve_falls_back_for_empty_loader() {
    let meta = read_meta_descriptor("ping", &StaticLoader::new());

    assert_eq!(meta.framework_version(), FALLBACK_VERSION);
    assert_eq!(meta.descriptor().service_version(), FALLBACK_VERSION);
}

#[test]
fn resolve_falls_back_when_no_manifest_has_attribute() {
    let loader = StaticLoader::new()
        .with_manifest("a.jar", "Manifest-Version: 1.0\n")
        .with_manifest("b.jar", "Implementation-Title: other\n");

    let meta = read_meta_descriptor("ping", &loader);

    assert_eq!(meta.descriptor().service_version(), FALLBACK_VERSION);
}

// The first manifest in loader order wins. Real classpaths do not guarantee
// this order, so results differ between environments with several
// candidates; the stub loader fixes it here.
#[rstest]
#[case(vec![("a.jar", "1.0.0"), ("b.jar", "2.0.0")], "1.0.0")]
#[case(vec![("b.jar", "2.0.0"), ("a.jar", "1.0.0")], "2.0.0")]
#[case(vec![("c.jar", ""), ("b.jar", "2.0.0"), ("a.jar", "1.0.0")], "2.0.0")]
fn resolve_uses_first_manifest_in_loader_order(
    #[case] manifests: Vec<(&str, &str)>,
    #[case] expected: &str,
) {
    let loader = manifests
        .into_iter()
        .fold(StaticLoader::new(), |loader, (location, version)| {
            loader.with_manifest(location, &format!("Implementation-Version: {}\n", version))
        });

    let meta = read_meta_descriptor("ping", &loader);

    assert_eq!(meta.descriptor().service_version(), expected);
}

#[test]
fn resolve_falls_back_when_enumeration_fails() {
    let loader = StaticLoader::new()
        .with_properties("apolloVersion=1.2.3\n")
        .with_manifest("service.jar", "Implementation-Version: 4.5.6\n")
        .failing_enumeration();

    let meta = read_meta_descriptor("ping", &loader);

    assert_eq!(meta.descriptor().service_version(), FALLBACK_VERSION);
    assert_eq!(meta.framework_version(), "1.2.3");
}

#[test]
fn resolve_falls_back_when_earlier_manifest_is_unreadable() {
    let loader = StaticLoader::new()
        .with_unreadable("locked.jar", "META-INF/MANIFEST.MF")
        .with_manifest("service.jar", "Implementation-Version: 4.5.6\n");

    let meta = read_meta_descriptor("ping", &loader);

    assert_eq!(meta.descriptor().service_version(), FALLBACK_VERSION);
}

#[test]
fn resolve_falls_back_when_properties_unreadable() {
    let loader = StaticLoader::new()
        .with_unreadable("framework.jar", "metaDescriptor.properties")
        .with_manifest("service.jar", "Implementation-Version: 4.5.6\n");

    let meta = read_meta_descriptor("ping", &loader);

    assert_eq!(meta.framework_version(), FALLBACK_VERSION);
    assert_eq!(meta.descriptor().service_version(), "4.5.6");
}

#[rstest]
#[case("")]
#[case("apolloVersion=")]
#[case("# apolloVersion=1.2.3")]
#[case("otherVersion=1.2.3")]
fn resolve_never_returns_empty_framework_version(#[case] properties: &str) {
    let loader = StaticLoader::new().with_properties(properties);

    let meta = read_meta_descriptor("ping", &loader);

    assert_eq!(meta.framework_version(), FALLBACK_VERSION);
}

#[test]
fn resolve_is_repeatable() {
    let loader = StaticLoader::new()
        .with_properties("apolloVersion=1.2.3\n")
        .with_manifest("service.jar", "Implementation-Version: 4.5.6\n");
    let resolver = MetaResolver::new(MetaConfig::default());

    assert_eq!(
        resolver.resolve("ping", &loader),
        resolver.resolve("ping", &loader)
    );
}
