//! Flag sets carried by nodes.

use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Syntactic facts recorded on a node when it is built.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u16 {
        /// Declared with the `namespace` keyword rather than `module`.
        const NAMESPACE = 1 << 0;
        /// Inner part of a dotted name (`B` in `namespace A.B {}`).
        const NESTED_NAMESPACE = 1 << 1;
        /// `declare global { ... }`.
        const GLOBAL_AUGMENTATION = 1 << 2;
        /// Inside a `declare` context.
        const AMBIENT = 1 << 3;
    }
}

bitflags! {
    /// Printer and substitution hints attached to nodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EmitFlags: u32 {
        const NO_LEADING_COMMENTS = 1 << 1;
        const NO_TRAILING_COMMENTS = 1 << 2;
        const NO_COMMENTS = Self::NO_LEADING_COMMENTS.bits() | Self::NO_TRAILING_COMMENTS.bits();
        /// Never substitute this node.
        const NO_SUBSTITUTION = 1 << 3;
        /// The substitution pass calls `on_emit_node` for this node.
        const ADVISE_ON_EMIT_NODE = 1 << 4;
        /// Local binding of a declaration; never qualified with its container.
        const LOCAL_NAME = 1 << 5;
        /// Name qualified through the enclosing container.
        const EXPORT_NAME = 1 << 6;
        /// Internal name of a declaration (inside a class wrapper).
        const INTERNAL_NAME = 1 << 7;
        /// Reference to a runtime helper such as `__decorate`.
        const HELPER_NAME = 1 << 8;
        /// The statement list that follows belongs to a single declaration.
        const HAS_END_OF_DECLARATION_MARKER = 1 << 9;
        /// Closure produced to wrap a class with decorators or static initializers.
        const TYPESCRIPT_CLASS_WRAPPER = 1 << 10;
        /// Statement synthesized into a directive prologue.
        const CUSTOM_PROLOGUE = 1 << 11;
    }
}

/// A single modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Export,
    Default,
    Declare,
    Abstract,
    Public,
    Private,
    Protected,
    Readonly,
    Static,
    Async,
    Const,
    Override,
    Accessor,
    In,
    Out,
}

impl ModifierKind {
    pub fn flag(self) -> ModifierFlags {
        match self {
            ModifierKind::Export => ModifierFlags::EXPORT,
            ModifierKind::Default => ModifierFlags::DEFAULT,
            ModifierKind::Declare => ModifierFlags::AMBIENT,
            ModifierKind::Abstract => ModifierFlags::ABSTRACT,
            ModifierKind::Public => ModifierFlags::PUBLIC,
            ModifierKind::Private => ModifierFlags::PRIVATE,
            ModifierKind::Protected => ModifierFlags::PROTECTED,
            ModifierKind::Readonly => ModifierFlags::READONLY,
            ModifierKind::Static => ModifierFlags::STATIC,
            ModifierKind::Async => ModifierFlags::ASYNC,
            ModifierKind::Const => ModifierFlags::CONST,
            ModifierKind::Override => ModifierFlags::OVERRIDE,
            ModifierKind::Accessor => ModifierFlags::ACCESSOR,
            ModifierKind::In => ModifierFlags::IN,
            ModifierKind::Out => ModifierFlags::OUT,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            ModifierKind::Export => "export",
            ModifierKind::Default => "default",
            ModifierKind::Declare => "declare",
            ModifierKind::Abstract => "abstract",
            ModifierKind::Public => "public",
            ModifierKind::Private => "private",
            ModifierKind::Protected => "protected",
            ModifierKind::Readonly => "readonly",
            ModifierKind::Static => "static",
            ModifierKind::Async => "async",
            ModifierKind::Const => "const",
            ModifierKind::Override => "override",
            ModifierKind::Accessor => "accessor",
            ModifierKind::In => "in",
            ModifierKind::Out => "out",
        }
    }

    /// Modifiers that have no runtime meaning and are always removed.
    pub fn is_typescript_only(self) -> bool {
        self.flag().intersects(ModifierFlags::TYPESCRIPT_MODIFIER)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u16 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const AMBIENT = 1 << 2;
        const ABSTRACT = 1 << 3;
        const PUBLIC = 1 << 4;
        const PRIVATE = 1 << 5;
        const PROTECTED = 1 << 6;
        const READONLY = 1 << 7;
        const STATIC = 1 << 8;
        const ASYNC = 1 << 9;
        const CONST = 1 << 10;
        const OVERRIDE = 1 << 11;
        const ACCESSOR = 1 << 12;
        const IN = 1 << 13;
        const OUT = 1 << 14;

        const ACCESSIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        /// Modifiers that turn a constructor parameter into a parameter property.
        const PARAMETER_PROPERTY = Self::ACCESSIBILITY.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
        const TYPESCRIPT_MODIFIER = Self::AMBIENT.bits()
            | Self::ABSTRACT.bits()
            | Self::ACCESSIBILITY.bits()
            | Self::READONLY.bits()
            | Self::CONST.bits()
            | Self::OVERRIDE.bits()
            | Self::IN.bits()
            | Self::OUT.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

/// Ordered modifier list as written in source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub kinds: SmallVec<[ModifierKind; 2]>,
}

impl Modifiers {
    pub fn none() -> Modifiers {
        Modifiers::default()
    }

    pub fn from_kinds(kinds: &[ModifierKind]) -> Modifiers {
        Modifiers {
            kinds: kinds.iter().copied().collect(),
        }
    }

    pub fn flags(&self) -> ModifierFlags {
        self.kinds
            .iter()
            .fold(ModifierFlags::empty(), |acc, kind| acc | kind.flag())
    }

    #[inline]
    pub fn has(&self, kind: ModifierKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// `true` when any of `flags` is present.
    #[inline]
    pub fn intersects(&self, flags: ModifierFlags) -> bool {
        self.flags().intersects(flags)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ModifierKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Copy keeping only the kinds accepted by `keep`.
    pub fn filtered(&self, mut keep: impl FnMut(ModifierKind) -> bool) -> Modifiers {
        Modifiers {
            kinds: self.kinds.iter().copied().filter(|k| keep(*k)).collect(),
        }
    }
}
