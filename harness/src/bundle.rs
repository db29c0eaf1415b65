//! In-memory artifact bundle: the output of a planning run.
//!
//! No file I/O in this module. The bundle is a deterministic in-memory
//! representation that can be inspected programmatically.
//!
//! Each artifact is tagged `normative` (participates in the bundle digest)
//! or observational (listed in the manifest but excluded from the digest).
//! The bundle digest is computed over the **digest basis**: a canonical
//! JSON projection of normative artifact hashes only.

use std::collections::BTreeMap;

use forage_kernel::grid::Direction;
use forage_kernel::proof::canon::{canonical_json_bytes, CanonError};
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Logical name of the serialized audit graph.
pub const SEARCH_GRAPH: &str = "search_graph.json";
/// Logical name of the plan summary.
pub const PLAN: &str = "plan.json";
/// Logical name of the replay verdict.
pub const REPLAY_REPORT: &str = "replay_report.json";

/// A single artifact in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    /// Logical filename (e.g. `"plan.json"`).
    pub name: String,
    pub content: Vec<u8>,
    /// `canonical_hash(HashDomain::BundleArtifact, content)`.
    pub content_hash: ContentHash,
    /// Whether this artifact participates in the bundle digest.
    pub normative: bool,
}

/// The complete artifact bundle from a planning run.
#[derive(Debug, Clone)]
pub struct PlanBundle {
    /// Artifacts indexed by logical name, in sorted order.
    pub artifacts: BTreeMap<String, BundleArtifact>,
    /// Canonical JSON listing all artifacts with normative flags.
    pub manifest: Vec<u8>,
    /// Canonical JSON listing normative artifact hashes only.
    pub digest_basis: Vec<u8>,
    /// `canonical_hash(HashDomain::BundleDigest, digest_basis)`.
    pub digest: ContentHash,
}

impl PlanBundle {
    #[must_use]
    pub fn artifact(&self, name: &str) -> Option<&BundleArtifact> {
        self.artifacts.get(name)
    }
}

/// Bundle assembly or verification failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    #[error(transparent)]
    Canon(#[from] CanonError),
    #[error("duplicate artifact name {name}")]
    DuplicateArtifact { name: String },
    #[error("artifact {artifact}: stored hash {expected} but content hashes to {actual}")]
    ContentHashMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    #[error("manifest does not match artifacts")]
    ManifestMismatch,
    #[error("digest basis does not match normative artifacts")]
    DigestBasisMismatch,
    #[error("bundle digest {expected} does not match recomputed {actual}")]
    DigestMismatch { expected: String, actual: String },
    #[error("normative artifact {artifact} is not canonical JSON")]
    ArtifactNotCanonical { artifact: String },
    #[error("{artifact}.{field} is missing or malformed")]
    MissingField {
        artifact: &'static str,
        field: &'static str,
    },
    #[error("{field} differs between {left} and {right}")]
    BindingMismatch {
        field: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("{artifact} names unknown action {name:?}")]
    UnknownAction { artifact: &'static str, name: String },
    #[error("{artifact} declares plan_len {declared} but lists {actual} actions")]
    PlanLengthMismatch {
        artifact: &'static str,
        declared: u64,
        actual: usize,
    },
}

/// Build a [`PlanBundle`] from `(name, content, normative)` triples.
///
/// # Errors
///
/// Returns [`BundleError::DuplicateArtifact`] if a name repeats, or
/// [`BundleError::Canon`] if the manifest cannot be serialized.
pub fn build_bundle(artifacts: Vec<(String, Vec<u8>, bool)>) -> Result<PlanBundle, BundleError> {
    let mut map = BTreeMap::new();
    for (name, content, normative) in artifacts {
        if map.contains_key(&name) {
            return Err(BundleError::DuplicateArtifact { name });
        }
        let content_hash = canonical_hash(HashDomain::BundleArtifact, &content);
        map.insert(
            name.clone(),
            BundleArtifact {
                name,
                content,
                content_hash,
                normative,
            },
        );
    }

    let manifest = manifest_bytes(&map)?;
    let digest_basis = digest_basis_bytes(&map)?;
    let digest = canonical_hash(HashDomain::BundleDigest, &digest_basis);

    Ok(PlanBundle {
        artifacts: map,
        manifest,
        digest_basis,
        digest,
    })
}

/// Verify the internal consistency of a bundle.
///
/// Checks, in order:
///
/// 1. each artifact's `content_hash` matches its content;
/// 2. `manifest` and `digest_basis` match projections recomputed from the
///    artifacts;
/// 3. `digest` is the hash of `digest_basis`;
/// 4. normative `.json` artifacts are in canonical form;
/// 5. when `plan.json` and `search_graph.json` are both present, they name
///    the same policy digest and world;
/// 6. `plan.json` actions are all known directions and `plan_len` counts
///    them.
///
/// # Errors
///
/// Returns the first [`BundleError`] encountered.
pub fn verify_bundle(bundle: &PlanBundle) -> Result<(), BundleError> {
    for artifact in bundle.artifacts.values() {
        let recomputed = canonical_hash(HashDomain::BundleArtifact, &artifact.content);
        if recomputed != artifact.content_hash {
            return Err(BundleError::ContentHashMismatch {
                artifact: artifact.name.clone(),
                expected: artifact.content_hash.as_str().to_string(),
                actual: recomputed.as_str().to_string(),
            });
        }
    }

    if manifest_bytes(&bundle.artifacts)? != bundle.manifest {
        return Err(BundleError::ManifestMismatch);
    }
    if digest_basis_bytes(&bundle.artifacts)? != bundle.digest_basis {
        return Err(BundleError::DigestBasisMismatch);
    }

    let recomputed = canonical_hash(HashDomain::BundleDigest, &bundle.digest_basis);
    if recomputed != bundle.digest {
        return Err(BundleError::DigestMismatch {
            expected: bundle.digest.as_str().to_string(),
            actual: recomputed.as_str().to_string(),
        });
    }

    for artifact in bundle.artifacts.values() {
        let is_json = std::path::Path::new(&artifact.name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if artifact.normative && is_json && !is_canonical_json(&artifact.content) {
            return Err(BundleError::ArtifactNotCanonical {
                artifact: artifact.name.clone(),
            });
        }
    }

    verify_plan_graph_binding(bundle)?;
    verify_plan_actions(bundle)?;
    Ok(())
}

/// Decode the action list of `plan.json`, if the bundle carries one.
///
/// # Errors
///
/// Returns [`BundleError::MissingField`] when `actions` or `plan_len` is
/// absent, [`BundleError::UnknownAction`] for a name that is not a
/// direction, and [`BundleError::PlanLengthMismatch`] when the two disagree.
pub fn verify_plan_actions(bundle: &PlanBundle) -> Result<Option<Vec<Direction>>, BundleError> {
    let Some(plan) = bundle.artifact(PLAN) else {
        return Ok(None);
    };
    let missing = |field| BundleError::MissingField {
        artifact: PLAN,
        field,
    };
    let plan: serde_json::Value =
        serde_json::from_slice(&plan.content).map_err(|_| missing("actions"))?;
    let names = plan["actions"].as_array().ok_or_else(|| missing("actions"))?;
    let actions = names
        .iter()
        .map(|name| {
            let name = name.as_str().ok_or_else(|| missing("actions"))?;
            Direction::parse(name).ok_or_else(|| BundleError::UnknownAction {
                artifact: PLAN,
                name: name.to_string(),
            })
        })
        .collect::<Result<Vec<Direction>, BundleError>>()?;
    let declared = plan["plan_len"].as_u64().ok_or_else(|| missing("plan_len"))?;
    if usize::try_from(declared).ok() != Some(actions.len()) {
        return Err(BundleError::PlanLengthMismatch {
            artifact: PLAN,
            declared,
            actual: actions.len(),
        });
    }
    Ok(Some(actions))
}

fn verify_plan_graph_binding(bundle: &PlanBundle) -> Result<(), BundleError> {
    let (Some(plan), Some(graph)) = (bundle.artifact(PLAN), bundle.artifact(SEARCH_GRAPH)) else {
        return Ok(());
    };
    let plan: serde_json::Value =
        serde_json::from_slice(&plan.content).map_err(|_| BundleError::MissingField {
            artifact: PLAN,
            field: "policy_digest",
        })?;
    let graph: serde_json::Value =
        serde_json::from_slice(&graph.content).map_err(|_| BundleError::MissingField {
            artifact: SEARCH_GRAPH,
            field: "metadata",
        })?;

    for field in ["policy_digest", "world_id"] {
        let left = plan[field].as_str().ok_or(BundleError::MissingField {
            artifact: PLAN,
            field,
        })?;
        let right = graph["metadata"][field]
            .as_str()
            .ok_or(BundleError::MissingField {
                artifact: SEARCH_GRAPH,
                field,
            })?;
        if left != right {
            return Err(BundleError::BindingMismatch {
                field,
                left: PLAN,
                right: SEARCH_GRAPH,
            });
        }
    }
    Ok(())
}

fn manifest_bytes(artifacts: &BTreeMap<String, BundleArtifact>) -> Result<Vec<u8>, CanonError> {
    let entries: Vec<serde_json::Value> = artifacts
        .values()
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
                "normative": a.normative,
            })
        })
        .collect();
    canonical_json_bytes(&serde_json::json!({
        "artifacts": entries,
        "schema_version": "plan_bundle.v1",
    }))
}

fn digest_basis_bytes(artifacts: &BTreeMap<String, BundleArtifact>) -> Result<Vec<u8>, CanonError> {
    let entries: Vec<serde_json::Value> = artifacts
        .values()
        .filter(|a| a.normative)
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
            })
        })
        .collect();
    canonical_json_bytes(&serde_json::json!({
        "artifacts": entries,
        "schema_version": "plan_bundle_digest_basis.v1",
    }))
}

fn is_canonical_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|v| canonical_json_bytes(&v).ok())
        .is_some_and(|canon| canon == bytes)
}
