//! Shared fixtures for refmap integration tests.

#![allow(dead_code)]

use refmap::{RefMap, RefMapConfig, Token};
use std::rc::Rc;

/// Object type used across the suites. Values repeat on purpose: equal
/// payloads must never be confused with the same object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub value: u32,
}

/// A registry plus the objects registered into it, in registration order
pub struct RegistryFixture {
    pub map: RefMap<Rc<Payload>>,
    pub objects: Vec<Rc<Payload>>,
    pub tokens: Vec<Token>,
}

impl RegistryFixture {
    /// Empty registry with warnings disabled
    pub fn empty() -> Self {
        let config = RefMapConfig::default()
            .with_label("fixture")
            .with_retention_warning(None);
        Self {
            map: RefMap::with_config(config),
            objects: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Registry with `count` registered objects, all with the same payload
    pub fn with_objects(count: usize) -> Self {
        let mut fixture = Self::empty();
        for _ in 0..count {
            fixture.register(Rc::new(Payload { value: 7 }));
        }
        fixture
    }

    /// Register `object` and remember it
    pub fn register(&mut self, object: Rc<Payload>) -> Token {
        let token = self.map.ref_object(&object);
        self.objects.push(object);
        self.tokens.push(token);
        token
    }
}

/// Assert that `token` resolves to exactly `object`
pub fn assert_resolves_to(map: &RefMap<Rc<Payload>>, token: Token, object: &Rc<Payload>) {
    let found = map
        .deref(token)
        .unwrap_or_else(|| panic!("{} resolved to nothing", token));
    assert!(
        Rc::ptr_eq(found, object),
        "{} resolved to a different object ({:?})",
        token,
        found
    );
}
