//! Runtime helpers requested by lowered code.
//!
//! Lowering only records which helpers a unit calls. Whoever assembles the
//! final output decides whether to inline [`HelpersNeeded::prelude`] or to
//! import the helpers from a runtime library.

/// Helpers referenced by one lowered unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpersNeeded {
    pub decorate: bool,
    pub metadata: bool,
    pub param: bool,
    pub rest: bool,
}

impl HelpersNeeded {
    pub fn any(&self) -> bool {
        self.decorate || self.metadata || self.param || self.rest
    }

    /// Source text defining every requested helper.
    pub fn prelude(&self) -> String {
        let mut out = String::new();
        if !self.any() {
            return out;
        }
        if self.decorate {
            out.push_str(DECORATE_HELPER);
        }
        if self.metadata {
            out.push_str(METADATA_HELPER);
        }
        if self.param {
            out.push_str(PARAM_HELPER);
        }
        if self.rest {
            out.push_str(REST_HELPER);
        }
        out
    }
}

const DECORATE_HELPER: &str = r#"var __decorate = (this && this.__decorate) || function (decorators, target, key, desc) {
    var c = arguments.length, r = c < 3 ? target : desc === null ? desc = Object.getOwnPropertyDescriptor(target, key) : desc, d;
    if (typeof Reflect === "object" && typeof Reflect.decorate === "function") r = Reflect.decorate(decorators, target, key, desc);
    else for (var i = decorators.length - 1; i >= 0; i--) if (d = decorators[i]) r = (c < 3 ? d(r) : c > 3 ? d(target, key, r) : d(target, key)) || r;
    return c > 3 && r && Object.defineProperty(target, key, r), r;
};
"#;

const METADATA_HELPER: &str = r#"var __metadata = (this && this.__metadata) || function (k, v) {
    if (typeof Reflect === "object" && typeof Reflect.metadata === "function") return Reflect.metadata(k, v);
};
"#;

const PARAM_HELPER: &str = r#"var __param = (this && this.__param) || function (paramIndex, decorator) {
    return function (target, key) { decorator(target, key, paramIndex); }
};
"#;

const REST_HELPER: &str = r#"var __rest = (this && this.__rest) || function (s, e) {
    var t = {};
    for (var p in s) if (Object.prototype.hasOwnProperty.call(s, p) && e.indexOf(p) < 0)
        t[p] = s[p];
    if (s != null && typeof Object.getOwnPropertySymbols === "function")
        for (var i = 0, p = Object.getOwnPropertySymbols(s); i < p.length; i++) {
            if (e.indexOf(p[i]) < 0 && Object.prototype.propertyIsEnumerable.call(s, p[i]))
                t[p[i]] = s[p[i]];
        }
    return t;
};
"#;

#[cfg(test)]
#[path = "../tests/helpers.rs"]
mod tests;
