//! Configuration validation holds for every combination of settings.

use std::sync::Arc;

use fanout_router::{
    ChannelRef, ConfigurationError, InMemoryChannelRegistry, Message, QueueChannel, RouterBuilder,
};
use proptest::prelude::*;

fn builder(
    direct: bool,
    by_name: bool,
    registry: bool,
    names: Vec<String>,
) -> RouterBuilder<String> {
    let mut builder = RouterBuilder::new();
    if direct {
        builder = builder.channel_resolver(|_: &Message<String>| Vec::<ChannelRef<String>>::new());
    }
    if by_name {
        let resolved = names.clone();
        builder = builder.channel_name_resolver(move |_: &Message<String>| resolved.clone());
    }
    if registry {
        let registry = Arc::new(InMemoryChannelRegistry::<String>::new());
        for name in &names {
            registry.register(Arc::new(QueueChannel::<String>::new(name.as_str())));
        }
        builder = builder.channel_registry(registry);
    }
    builder
}

fn expected(direct: bool, by_name: bool, registry: bool) -> Result<&'static str, ConfigurationError> {
    match (direct, by_name, registry) {
        (true, true, _) => Err(ConfigurationError::ConflictingResolvers),
        (false, false, _) => Err(ConfigurationError::MissingResolver),
        (false, true, false) => Err(ConfigurationError::MissingRegistry),
        (true, false, _) => Ok("direct"),
        (false, true, true) => Ok("by-name"),
    }
}

proptest! {
    #[test]
    fn build_accepts_exactly_one_resolver_kind(
        direct in any::<bool>(),
        by_name in any::<bool>(),
        registry in any::<bool>(),
        names in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let outcome = builder(direct, by_name, registry, names)
            .build()
            .map(|router| router.strategy().kind());
        prop_assert_eq!(outcome, expected(direct, by_name, registry));
    }

    #[test]
    fn both_resolvers_always_conflict(registry in any::<bool>()) {
        let err = builder(true, true, registry, vec!["a".into()]).build().unwrap_err();
        prop_assert_eq!(err, ConfigurationError::ConflictingResolvers);
    }

    #[test]
    fn no_resolver_always_missing(registry in any::<bool>()) {
        let err = builder(false, false, registry, Vec::new()).build().unwrap_err();
        prop_assert_eq!(err, ConfigurationError::MissingResolver);
    }
}

#[test]
fn builder_is_reusable_after_configuration_error() {
    let builder = builder(true, true, true, vec!["audit".into()]);
    assert_eq!(
        builder.build().unwrap_err(),
        ConfigurationError::ConflictingResolvers
    );

    let router = builder.clear_channel_resolver().build().unwrap();
    assert_eq!(router.strategy().kind(), "by-name");
}

#[test]
fn each_build_produces_an_independent_router() {
    let builder = builder(false, true, true, vec!["audit".into()]);
    let first = builder.build().unwrap();

    let builder = builder.resolution_required(true);
    let second = builder.build().unwrap();

    assert!(!first.resolution_required());
    assert!(second.resolution_required());
}
