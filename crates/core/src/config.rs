//! On-disk schema of an equation set.
//!
//! These are plain serde records; validation happens when they are turned into
//! an [`EquationSet`](crate::EquationSet).
//!
//! ```json
//! {
//!   "name": "standard set",
//!   "terms": [
//!     {"id": "P", "name": "pressure", "latex": "P"},
//!     {"id": "rho_g", "name": "density, gravity", "latex": "\\rho g", "sign": "-"}
//!   ],
//!   "equations": [
//!     {"id": "hydrostatic", "name": "hydrostatic equation", "left": ["dp_dz"], "right": ["rho_g"]}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub terms: Vec<TermConfig>,
    pub equations: Vec<EquationConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermConfig {
    pub id: String,
    /// Defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub latex: String,
    /// `"+"` or `"-"`, defaults to `"+"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquationConfig {
    pub id: String,
    /// Defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}
