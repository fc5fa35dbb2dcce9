//! Opaque handles into the host document tree.
//!
//! The layout tree mirrors the renderable subset of the DOM but does not
//! own or traverse it. The tree builder hands each layout node the handle
//! of its originating element (or none, for anonymous and generated
//! boxes) and the handle of the browsing context the document belongs to.
//! Both are lookup keys only: this crate never dereferences them, so
//! document liveness is entirely the host's concern.

use serde::Serialize;

/// A handle to a node in the host document tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// Stored as a back-reference on layout nodes that mirror a real element
/// or text node. Anonymous and generated layout nodes carry no handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DomNodeId(pub usize);

/// A handle to the browsing context that owns the document.
///
/// [§ 7.3 Browsing contexts](https://html.spec.whatwg.org/multipage/document-sequences.html#browsing-context)
///
/// "A browsing context is a programmatic representation of a series of
/// documents." Every layout node records which context it was built for;
/// viewport geometry and device scale are looked up through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BrowsingContextId(pub u32);
