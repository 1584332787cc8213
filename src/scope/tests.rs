//! Unit tests for the scope chain.

use super::scope::ScopeChain;

#[test]
fn test_resolve_in_single_frame() {
    let mut scope = ScopeChain::new();
    scope.push();
    scope.declare("Width", 10);

    assert_eq!(scope.resolve("Width"), Some(&10));
    assert_eq!(scope.resolve("Height"), None);
}

#[test]
fn test_inner_frame_shadows_outer() {
    let mut scope = ScopeChain::new();
    scope.push();
    scope.declare("Width", 10);
    scope.push();
    scope.declare("Width", 20);

    assert_eq!(scope.resolve("Width"), Some(&20));

    scope.pop();
    assert_eq!(scope.resolve("Width"), Some(&10));
}

#[test]
fn test_outer_binding_visible_in_inner_frame() {
    let mut scope = ScopeChain::new();
    scope.push();
    scope.declare("Color", "#ffffff");
    scope.push();

    assert!(scope.is_defined("Color"));
    assert_eq!(scope.depth(), 2);
}

#[test]
fn test_popped_binding_is_gone() {
    let mut scope = ScopeChain::new();
    scope.push();
    scope.push();
    scope.declare("Inner", true);
    scope.pop();

    assert!(!scope.is_defined("Inner"));
    assert_eq!(scope.depth(), 1);
}

#[test]
fn test_redeclare_in_same_frame_replaces() {
    let mut scope = ScopeChain::new();
    scope.push();
    scope.declare("K", 1);
    scope.declare("K", 2);

    assert_eq!(scope.resolve("K"), Some(&2));
}

#[test]
fn test_declare_without_frame_is_ignored() {
    let mut scope: ScopeChain<i32> = ScopeChain::new();
    scope.declare("K", 1);
    scope.pop();

    assert_eq!(scope.depth(), 0);
    assert!(!scope.is_defined("K"));
}
