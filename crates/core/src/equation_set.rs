//! Equation set: the full pool of equations and terms active in one game.
//!
//! Loading validates every set-wide invariant up front:
//!
//! - term and equation ids are unique
//! - every equation references declared terms only
//! - every declared term belongs to exactly one equation
//!
//! The last rule is what gives each board a unique solution. The first failed
//! rule aborts the load with a [`ConfigError`]; nothing is partially built.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use crate::config::{EquationConfig, SetConfig, TermConfig};
use crate::equation::{Equation, EquationId};
use crate::error::ConfigError;
use crate::term::{Markup, Term, TermId};
use crate::types::Sign;

/// Name used when neither the config nor the file name provides one.
pub const DEFAULT_SET_NAME: &str = "My Equations";

#[derive(Debug, Clone)]
pub struct EquationSet {
    name: String,
    terms: BTreeMap<TermId, Term>,
    equations: BTreeMap<EquationId, Equation>,
    owner: HashMap<TermId, EquationId>,
}

impl EquationSet {
    /// Validate a parsed config. `default_name` is used when the config has none.
    pub fn from_config(config: SetConfig, default_name: &str) -> Result<Self, ConfigError> {
        if config.equations.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut terms = BTreeMap::new();
        let mut declared = Vec::with_capacity(config.terms.len());
        for tc in config.terms {
            let term = build_term(tc)?;
            if terms.contains_key(term.id()) {
                return Err(ConfigError::DuplicateTermId {
                    term: term.id().to_string(),
                });
            }
            declared.push(term.id().clone());
            terms.insert(term.id().clone(), term);
        }

        let mut equations = BTreeMap::new();
        let mut owner: HashMap<TermId, EquationId> = HashMap::new();
        for ec in config.equations {
            let equation = build_equation(ec)?;
            if equations.contains_key(equation.id()) {
                return Err(ConfigError::DuplicateEquationId {
                    equation: equation.id().to_string(),
                });
            }

            for term in equation.all_terms() {
                if !terms.contains_key(term) {
                    return Err(ConfigError::UnknownTerm {
                        equation: equation.id().to_string(),
                        term: term.to_string(),
                    });
                }
                if let Some(first) = owner.get(term) {
                    return Err(ConfigError::TermReused {
                        term: term.to_string(),
                        first: first.to_string(),
                        second: equation.id().to_string(),
                    });
                }
                owner.insert(term.clone(), equation.id().clone());
            }

            equations.insert(equation.id().clone(), equation);
        }

        if let Some(unused) = declared.iter().find(|id| !owner.contains_key(*id)) {
            return Err(ConfigError::UnusedTerm {
                term: unused.to_string(),
            });
        }

        let name = config
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| default_name.to_string());

        log::info!(
            "loaded equation set \"{}\": {} equations, {} terms",
            name,
            equations.len(),
            terms.len()
        );

        Ok(Self {
            name,
            terms,
            equations,
            owner,
        })
    }

    pub fn from_json_str(json: &str, default_name: &str) -> Result<Self, ConfigError> {
        let config: SetConfig = serde_json::from_str(json)?;
        Self::from_config(config, default_name)
    }

    /// Load from a JSON file.
    ///
    /// Without a `name` in the file, the set is named after the file stem with
    /// underscores turned into spaces (`standard_set.json` → "standard set").
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("reading equation set from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let default_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.replace('_', " "))
            .unwrap_or_else(|| DEFAULT_SET_NAME.to_string());
        Self::from_json_str(&json, &default_name)
    }

    /// Export back into the on-disk schema (ids in sorted order).
    pub fn to_config(&self) -> SetConfig {
        let terms = self
            .terms
            .values()
            .map(|t| TermConfig {
                id: t.id().to_string(),
                name: Some(t.name().to_string()),
                latex: t.markup().source().to_string(),
                sign: Some(t.sign().as_str().to_string()),
            })
            .collect();
        let equations = self
            .equations
            .values()
            .map(|e| EquationConfig {
                id: e.id().to_string(),
                name: Some(e.name().to_string()),
                left: e.left().iter().map(|t| t.to_string()).collect(),
                right: e.right().iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        SetConfig {
            name: Some(self.name.clone()),
            terms,
            equations,
        }
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.to_config())?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of equations.
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn term(&self, id: &TermId) -> Option<&Term> {
        self.terms.get(id)
    }

    pub fn equation(&self, id: &EquationId) -> Option<&Equation> {
        self.equations.get(id)
    }

    /// The one equation a term belongs to.
    pub fn equation_of(&self, term: &TermId) -> Option<&Equation> {
        self.owner.get(term).and_then(|id| self.equations.get(id))
    }

    pub fn equations(&self) -> impl Iterator<Item = &Equation> + '_ {
        self.equations.values()
    }

    /// Every term referenced by the set.
    pub fn all_terms(&self) -> impl Iterator<Item = &Term> + '_ {
        self.terms.values()
    }
}

impl fmt::Display for EquationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Equation set \"{}\" with {} equations:",
            self.name,
            self.equations.len()
        )?;
        for equation in self.equations.values() {
            write!(f, "\n - {}", equation)?;
        }
        Ok(())
    }
}

fn build_term(tc: TermConfig) -> Result<Term, ConfigError> {
    let sign = match tc.sign.as_deref() {
        None => Sign::Plus,
        Some(s) => Sign::from_str(s).ok_or_else(|| ConfigError::InvalidSign {
            term: tc.id.clone(),
            sign: s.to_string(),
        })?,
    };
    let markup = Markup::parse(&tc.latex).map_err(|source| ConfigError::InvalidMarkup {
        term: tc.id.clone(),
        source,
    })?;
    let name = tc.name.unwrap_or_else(|| tc.id.clone());
    Ok(Term::new(tc.id, name, markup, sign))
}

fn build_equation(ec: EquationConfig) -> Result<Equation, ConfigError> {
    let name = ec.name.unwrap_or_else(|| ec.id.clone());
    Equation::new(ec.id, name, ec.left, ec.right)
}
