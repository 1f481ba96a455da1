//! The core routing scenarios, one per configuration shape.

use std::sync::Arc;

use fanout_router::{
    ChannelRef, ConfigurationError, DeliveryError, InMemoryChannelRegistry, Message,
    QueueChannel, RouterBuilder,
};

use crate::support::{queue, registry_with};

#[test]
fn route_with_channel_resolver() {
    let (channel1, handle1) = queue("channel1");
    let (channel2, handle2) = queue("channel2");
    let router = RouterBuilder::new()
        .channel_resolver(move |_: &Message<String>| {
            vec![Arc::clone(&handle1), Arc::clone(&handle2)]
        })
        .build()
        .unwrap();

    router
        .route(&Message::from_payload("test".to_string()))
        .unwrap();

    let result1 = channel1.receive(25).unwrap();
    assert_eq!(result1.payload, "test");
    let result2 = channel2.receive(25).unwrap();
    assert_eq!(result2.payload, "test");
}

#[test]
fn route_with_channel_name_resolver() {
    let (registry, queues) = registry_with(&["channel1", "channel2"]);
    let router = RouterBuilder::new()
        .channel_name_resolver(|_: &Message<String>| {
            vec!["channel1".to_string(), "channel2".to_string()]
        })
        .channel_registry(registry)
        .build()
        .unwrap();

    let message = Message::from_payload("test".to_string());
    assert_eq!(router.route(&message).unwrap(), 2);

    for channel in &queues {
        let received = channel.receive(25).unwrap();
        assert_eq!(received, message);
    }
}

#[test]
fn configuring_both_resolvers_is_not_allowed() {
    let err = RouterBuilder::new()
        .channel_resolver(|_: &Message<String>| Vec::<ChannelRef<String>>::new())
        .channel_name_resolver(|_: &Message<String>| Vec::<String>::new())
        .build()
        .unwrap_err();

    assert_eq!(err, ConfigurationError::ConflictingResolvers);
}

#[test]
fn channel_name_lookup_failure() {
    let registry = Arc::new(InMemoryChannelRegistry::<String>::new());
    let router = RouterBuilder::new()
        .channel_name_resolver(|_: &Message<String>| vec!["noSuchChannel".to_string()])
        .channel_registry(registry)
        .build()
        .unwrap();

    let err = router
        .route(&Message::from_payload("test".to_string()))
        .unwrap_err();

    assert!(matches!(err, DeliveryError::ChannelNotFound { .. }));
    assert_eq!(err.missing_channel(), Some("noSuchChannel"));
}

#[test]
fn channel_resolver_is_required() {
    let registry = Arc::new(InMemoryChannelRegistry::<String>::new());
    registry.register(Arc::new(QueueChannel::<String>::new("unused")));

    let err = RouterBuilder::new()
        .channel_registry(registry)
        .build()
        .unwrap_err();

    assert_eq!(err, ConfigurationError::MissingResolver);
}

#[test]
fn channel_name_resolver_requires_registry() {
    let err = RouterBuilder::new()
        .channel_name_resolver(|_: &Message<String>| vec!["channel1".to_string()])
        .build()
        .unwrap_err();

    assert_eq!(err, ConfigurationError::MissingRegistry);
}
