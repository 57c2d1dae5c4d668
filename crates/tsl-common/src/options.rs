//! Compiler options consumed by the lowering stage.
//!
//! Only the flags that change how TypeScript syntax is lowered live here.
//! Options are read-only once a `LoweringOptions` has been built; the
//! lowering stage never mutates them.
//!
//! Options can be deserialized from a tsconfig-style `compilerOptions`
//! object:
//!
//! ```json
//! {
//!     "target": "es5",
//!     "module": "commonjs",
//!     "emitDecoratorMetadata": true,
//!     "preserveConstEnums": false
//! }
//! ```

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Errors produced while reading options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid compilerOptions JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown {option} value '{value}'")]
    UnknownValue { option: &'static str, value: String },
}

/// Output language level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ScriptTarget {
    ES3,
    #[default]
    ES5,
    ES2015,
    ES2016,
    ES2017,
    ES2018,
    ES2019,
    ES2020,
    ES2021,
    ES2022,
    ESNext,
}

impl ScriptTarget {
    /// Targets below this level cannot evaluate a class with decorators or
    /// static initializers without an enclosing closure.
    pub const WRAPPER_FREE_THRESHOLD: ScriptTarget = ScriptTarget::ES2015;

    /// `true` when decorated classes or classes with static initializers
    /// have to be wrapped in an immediately-invoked closure.
    pub fn needs_class_wrapper(self) -> bool {
        self < Self::WRAPPER_FREE_THRESHOLD
    }

    /// `true` when `BigInt` may be missing at runtime.
    pub fn needs_bigint_fallback(self) -> bool {
        self < ScriptTarget::ES2020
    }

    /// `true` when `Symbol` may be missing at runtime.
    pub fn needs_symbol_fallback(self) -> bool {
        self < ScriptTarget::ES2015
    }

    /// Property descriptors are an ES5 feature; ES3 decorate calls omit them.
    pub fn supports_property_descriptors(self) -> bool {
        self > ScriptTarget::ES3
    }
}

impl FromStr for ScriptTarget {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let target = match s.to_ascii_lowercase().as_str() {
            "es3" => Self::ES3,
            "es5" => Self::ES5,
            "es6" | "es2015" => Self::ES2015,
            "es2016" => Self::ES2016,
            "es2017" => Self::ES2017,
            "es2018" => Self::ES2018,
            "es2019" => Self::ES2019,
            "es2020" => Self::ES2020,
            "es2021" => Self::ES2021,
            "es2022" => Self::ES2022,
            "esnext" => Self::ESNext,
            _ => {
                return Err(OptionsError::UnknownValue {
                    option: "target",
                    value: s.to_string(),
                });
            }
        };
        Ok(target)
    }
}

impl TryFrom<String> for ScriptTarget {
    type Error = OptionsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ScriptTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ES3 => "ES3",
            Self::ES5 => "ES5",
            Self::ES2015 => "ES2015",
            Self::ES2016 => "ES2016",
            Self::ES2017 => "ES2017",
            Self::ES2018 => "ES2018",
            Self::ES2019 => "ES2019",
            Self::ES2020 => "ES2020",
            Self::ES2021 => "ES2021",
            Self::ES2022 => "ES2022",
            Self::ESNext => "ESNext",
        };
        f.write_str(name)
    }
}

/// Module output format the rest of the pipeline will produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ModuleKind {
    None,
    #[default]
    CommonJS,
    AMD,
    UMD,
    System,
    ES2015,
    ES2020,
    ES2022,
    ESNext,
}

impl ModuleKind {
    /// Formats whose exports live on an `exports` object.
    pub fn uses_exports_object(self) -> bool {
        matches!(self, Self::CommonJS | Self::AMD | Self::UMD)
    }

    /// Formats that keep ES `import`/`export` syntax.
    pub fn is_es_module(self) -> bool {
        matches!(
            self,
            Self::ES2015 | Self::ES2020 | Self::ES2022 | Self::ESNext
        )
    }
}

impl FromStr for ModuleKind {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "commonjs" => Self::CommonJS,
            "amd" => Self::AMD,
            "umd" => Self::UMD,
            "system" => Self::System,
            "es6" | "es2015" => Self::ES2015,
            "es2020" => Self::ES2020,
            "es2022" => Self::ES2022,
            "esnext" => Self::ESNext,
            _ => {
                return Err(OptionsError::UnknownValue {
                    option: "module",
                    value: s.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

impl TryFrom<String> for ModuleKind {
    type Error = OptionsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Policy for imports whose bindings are never used as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ImportsNotUsedAsValues {
    /// Drop the import entirely.
    #[default]
    Remove,
    /// Keep the import for its side effects (`import "mod";`).
    Preserve,
    /// Like `Preserve`; the checker additionally reports an error.
    Error,
}

impl ImportsNotUsedAsValues {
    /// `true` when an import with no surviving bindings is kept anyway.
    pub fn keeps_unreferenced(self) -> bool {
        !matches!(self, Self::Remove)
    }
}

impl TryFrom<String> for ImportsNotUsedAsValues {
    type Error = OptionsError;

    fn try_from(value: String) -> Result<Self, OptionsError> {
        match value.to_ascii_lowercase().as_str() {
            "remove" => Ok(ImportsNotUsedAsValues::Remove),
            "preserve" => Ok(ImportsNotUsedAsValues::Preserve),
            "error" => Ok(ImportsNotUsedAsValues::Error),
            _ => Err(OptionsError::UnknownValue {
                option: "importsNotUsedAsValues",
                value,
            }),
        }
    }
}

/// Options read by the lowering stage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoweringOptions {
    pub target: ScriptTarget,
    pub module: ModuleKind,
    pub emit_decorator_metadata: bool,
    pub preserve_const_enums: bool,
    pub isolated_modules: bool,
    pub strict_null_checks: bool,
    pub always_strict: bool,
    pub remove_comments: bool,
    pub preserve_value_imports: bool,
    pub imports_not_used_as_values: ImportsNotUsedAsValues,
}

impl LoweringOptions {
    /// Parse a tsconfig-style `compilerOptions` object. Unknown keys are
    /// ignored so a whole `compilerOptions` block can be passed through.
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        let options: LoweringOptions = serde_json::from_str(json)?;
        tracing::debug!(
            target = %options.target,
            module = ?options.module,
            "loaded lowering options"
        );
        Ok(options)
    }

    /// `const enum` declarations are emitted when either flag asks for it.
    pub fn should_preserve_const_enums(&self) -> bool {
        self.preserve_const_enums || self.isolated_modules
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
