//! Artifact assembly from a project configuration
//!
//! Everything in this module is a pure function of `ProjectConfig`: no
//! filesystem or network state leaks into artifact content, and identical
//! configurations render byte-identical artifact sequences.

use crate::project::ProjectConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// The dependency every generated project is built around
pub const FASTIFY_PACKAGE: &str = "fastify";

/// Version offered as the default answer at the version prompt
pub const DEFAULT_FASTIFY_VERSION: &str = "5.2.2";

/// A single generated file: path relative to the project root plus fully
/// rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub relative_path: String,
    pub content: String,
}

impl Artifact {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// In-memory package.json. Field order here is emission order; the map
/// sections keep insertion order (serde_json `preserve_order`).
#[derive(Debug, Clone, Serialize)]
struct ManifestDocument {
    name: String,
    version: String,
    private: bool,
    #[serde(rename = "type")]
    module_type: String,
    scripts: Map<String, Value>,
    dependencies: Map<String, Value>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Map<String, Value>,
}

/// Additions applied to the base manifest when ESLint is enabled.
/// Kept as a separate named value so inclusion is all-or-nothing: either
/// every entry lands in the manifest or none does.
struct ManifestOverlay {
    scripts: Map<String, Value>,
    dev_dependencies: Map<String, Value>,
}

fn entries(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|&(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

fn base_manifest(config: &ProjectConfig) -> ManifestDocument {
    let mut dependencies = Map::new();
    dependencies.insert(
        FASTIFY_PACKAGE.to_string(),
        Value::String(format!("^{}", config.fastify_version)),
    );

    ManifestDocument {
        name: config.name.clone(),
        version: "1.0.0".to_string(),
        private: true,
        module_type: "module".to_string(),
        scripts: entries(&[
            ("dev", "tsx watch src/index.ts"),
            ("build", "tsc"),
            ("start", "node dist/index.js"),
        ]),
        dependencies,
        dev_dependencies: entries(&[
            ("@types/node", "^22.10.1"),
            ("tsx", "^4.19.2"),
            ("typescript", "^5.7.2"),
        ]),
    }
}

fn eslint_overlay() -> ManifestOverlay {
    ManifestOverlay {
        scripts: entries(&[("lint", "eslint src")]),
        dev_dependencies: entries(&[
            ("@eslint/js", "^9.17.0"),
            ("eslint", "^9.17.0"),
            ("typescript-eslint", "^8.18.1"),
        ]),
    }
}

/// Apply an overlay to the base manifest wholesale
fn merge_manifest(mut base: ManifestDocument, overlay: ManifestOverlay) -> ManifestDocument {
    base.scripts.extend(overlay.scripts);
    base.dev_dependencies.extend(overlay.dev_dependencies);
    base
}

fn render_manifest(config: &ProjectConfig) -> Result<String> {
    let mut manifest = base_manifest(config);
    if config.eslint {
        manifest = merge_manifest(manifest, eslint_overlay());
    }
    let rendered =
        serde_json::to_string_pretty(&manifest).context("Failed to render package.json")?;
    Ok(rendered + "\n")
}

const TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "NodeNext",
    "moduleResolution": "NodeNext",
    "outDir": "dist",
    "rootDir": "src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "sourceMap": true
  },
  "include": ["src"]
}
"#;

const ESLINT_CONFIG_JS: &str = r#"import eslint from '@eslint/js'
import tseslint from 'typescript-eslint'

export default tseslint.config(
  eslint.configs.recommended,
  ...tseslint.configs.recommended
)
"#;

const INDEX_TS: &str = r#"import { buildServer } from './server.js'

const port = Number(process.env.PORT ?? 3000)
const host = process.env.HOST ?? '0.0.0.0'

const server = await buildServer()

try {
  await server.listen({ port, host })
} catch (err) {
  server.log.error(err)
  process.exit(1)
}
"#;

const SERVER_TS: &str = r#"import Fastify from 'fastify'
import type { FastifyInstance } from 'fastify'
import { routes } from './routes.js'

export async function buildServer(): Promise<FastifyInstance> {
  const server = Fastify({ logger: true })
  await server.register(routes)
  return server
}
"#;

const ROUTES_TS: &str = r#"import type { FastifyInstance } from 'fastify'

export async function routes(server: FastifyInstance): Promise<void> {
  server.get('/', async () => ({ hello: 'world' }))
  server.get('/health', async () => ({ status: 'ok' }))
}
"#;

/// Assemble the full artifact sequence for a configuration.
///
/// Order is stable: package.json, tsconfig.json, the ESLint config when
/// enabled, then the source stubs.
pub fn build_artifacts(config: &ProjectConfig) -> Result<Vec<Artifact>> {
    let mut artifacts = vec![
        Artifact::new("package.json", render_manifest(config)?),
        Artifact::new("tsconfig.json", TSCONFIG_JSON),
    ];

    if config.eslint {
        artifacts.push(Artifact::new("eslint.config.js", ESLINT_CONFIG_JS));
    }

    artifacts.push(Artifact::new("src/index.ts", INDEX_TS));
    artifacts.push(Artifact::new("src/server.ts", SERVER_TS));
    artifacts.push(Artifact::new("src/routes.ts", ROUTES_TS));

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(eslint: bool) -> ProjectConfig {
        ProjectConfig {
            name: "my-app".to_string(),
            fastify_version: "5.2.2".to_string(),
            eslint,
        }
    }

    fn parsed_manifest(artifacts: &[Artifact]) -> Value {
        assert_eq!(artifacts[0].relative_path, "package.json");
        serde_json::from_str(&artifacts[0].content).unwrap()
    }

    #[test]
    fn test_eslint_disabled_omits_lint_artifacts() {
        let artifacts = build_artifacts(&config(false)).unwrap();
        let paths: Vec<&str> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "package.json",
                "tsconfig.json",
                "src/index.ts",
                "src/server.ts",
                "src/routes.ts"
            ]
        );

        let manifest = parsed_manifest(&artifacts);
        assert!(manifest["scripts"].get("lint").is_none());
        for key in ["@eslint/js", "eslint", "typescript-eslint"] {
            assert!(manifest["devDependencies"].get(key).is_none());
        }
    }

    #[test]
    fn test_eslint_enabled_adds_whole_overlay() {
        let artifacts = build_artifacts(&config(true)).unwrap();
        let paths: Vec<&str> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "package.json",
                "tsconfig.json",
                "eslint.config.js",
                "src/index.ts",
                "src/server.ts",
                "src/routes.ts"
            ]
        );

        let manifest = parsed_manifest(&artifacts);
        assert_eq!(manifest["scripts"]["lint"], "eslint src");
        for key in ["@eslint/js", "eslint", "typescript-eslint"] {
            assert!(
                manifest["devDependencies"].get(key).is_some(),
                "missing {}",
                key
            );
        }
    }

    #[test]
    fn test_manifest_pins_requested_version() {
        let artifacts = build_artifacts(&ProjectConfig {
            name: "pinned".to_string(),
            fastify_version: "4.28.1".to_string(),
            eslint: false,
        })
        .unwrap();
        let manifest = parsed_manifest(&artifacts);
        assert_eq!(manifest["dependencies"]["fastify"], "^4.28.1");
        assert_eq!(manifest["name"], "pinned");
    }

    #[test]
    fn test_identical_configs_render_identical_artifacts() {
        let first = build_artifacts(&config(true)).unwrap();
        let second = build_artifacts(&config(true)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_base_scripts_survive_merge() {
        let manifest = parsed_manifest(&build_artifacts(&config(true)).unwrap());
        assert_eq!(manifest["scripts"]["dev"], "tsx watch src/index.ts");
        assert_eq!(manifest["scripts"]["build"], "tsc");
        assert_eq!(manifest["scripts"]["start"], "node dist/index.js");
    }
}
