//! Built-in React hook names.
//!
//! The body scan records every `use*` call; this set lets downstream
//! consumers (the scaffold emitter in particular) tell framework hooks from
//! custom hooks, which are the ones worth mocking in generated tests.

use testloom_kit::{phf_set, PhfSet};

/// Hooks shipped by React itself.
pub static BUILTIN_HOOKS: PhfSet<&'static str> = phf_set! {
    "useState",
    "useEffect",
    "useContext",
    "useReducer",
    "useCallback",
    "useMemo",
    "useRef",
    "useImperativeHandle",
    "useLayoutEffect",
    "useInsertionEffect",
    "useDebugValue",
    "useDeferredValue",
    "useTransition",
    "useId",
    "useSyncExternalStore",
};

/// Check if a hook name is one of React's own.
#[inline]
pub fn is_builtin_hook(name: &str) -> bool {
    BUILTIN_HOOKS.contains(name)
}
