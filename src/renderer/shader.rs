//! Shader loading and checking
//!
//! `main.vs` and `main.fs` are WGSL files read at startup from the shader
//! directory. Each stage is parsed and validated on the CPU before wgpu sees
//! it, so failures come back as a `ShaderError` with the full diagnostic.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use naga::valid::{Capabilities, ValidationFlags, Validator};

/// Pipeline stage a shader file provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn file_name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "main.vs",
            ShaderStage::Fragment => "main.fs",
        }
    }

    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }

    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("compiling {stage} shader {} failed:\n{log}", .path.display())]
    Compile {
        stage: ShaderStage,
        path: PathBuf,
        log: String,
    },
    #[error("linking shader program failed: {log}")]
    Link { log: String },
}

/// A stage that parsed and validated
#[derive(Debug, Clone)]
pub struct CompiledShader {
    pub stage: ShaderStage,
    pub path: PathBuf,
    pub source: String,
    module: naga::Module,
}

impl CompiledShader {
    fn has_entry_point(&self) -> bool {
        let name = self.stage.entry_point();
        let stage = self.stage.naga_stage();
        self.module
            .entry_points
            .iter()
            .any(|ep| ep.name == name && ep.stage == stage)
    }

    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        let label = self.path.to_string_lossy();
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&label),
            source: wgpu::ShaderSource::Wgsl(self.source.as_str().into()),
        })
    }
}

/// Vertex + fragment pair whose entry points line up
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    pub vertex: CompiledShader,
    pub fragment: CompiledShader,
}

/// Read a shader source file
///
/// A missing or unreadable file is logged and yields an empty source, which
/// then fails to compile.
pub fn read_source(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            log::error!("could not open shader file {}: {e}", path.display());
            String::new()
        }
    }
}

/// Compile a single WGSL source for `stage`
pub fn compile_source(
    stage: ShaderStage,
    path: &Path,
    source: String,
) -> Result<CompiledShader, ShaderError> {
    let compile_error = |log: String| ShaderError::Compile {
        stage,
        path: path.to_path_buf(),
        log,
    };

    if source.trim().is_empty() {
        return Err(compile_error("empty shader source".to_string()));
    }

    let module = naga::front::wgsl::parse_str(&source)
        .map_err(|e| compile_error(e.emit_to_string(&source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| compile_error(e.emit_to_string(&source)))?;

    Ok(CompiledShader {
        stage,
        path: path.to_path_buf(),
        source,
        module,
    })
}

/// Read and compile one stage from `dir`
pub fn compile_stage(dir: &Path, stage: ShaderStage) -> Result<CompiledShader, ShaderError> {
    let path = dir.join(stage.file_name());
    let source = read_source(&path);
    compile_source(stage, &path, source)
}

/// Pair two compiled stages, checking each provides its entry point
pub fn link(vertex: CompiledShader, fragment: CompiledShader) -> Result<ShaderProgram, ShaderError> {
    let missing: Vec<String> = [&vertex, &fragment]
        .into_iter()
        .filter(|shader| !shader.has_entry_point())
        .map(|shader| {
            format!(
                "{} has no {} entry point `{}`",
                shader.path.display(),
                shader.stage,
                shader.stage.entry_point()
            )
        })
        .collect();

    if !missing.is_empty() {
        return Err(ShaderError::Link {
            log: missing.join("; "),
        });
    }

    Ok(ShaderProgram { vertex, fragment })
}

/// Load `main.vs` + `main.fs` from `dir` and link them
pub fn load_program(dir: &Path) -> Result<ShaderProgram, ShaderError> {
    let vertex = compile_stage(dir, ShaderStage::Vertex)?;
    let fragment = compile_stage(dir, ShaderStage::Fragment)?;
    let program = link(vertex, fragment)?;
    log::info!("shader program loaded from {}", dir.display());
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = "
        @vertex
        fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
            return vec4<f32>(position, 0.0, 1.0);
        }
    ";

    const FS: &str = "
        @fragment
        fn fs_main() -> @location(0) vec4<f32> {
            return vec4<f32>(1.0, 1.0, 1.0, 1.0);
        }
    ";

    fn shipped_shader_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders")
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let source = read_source(Path::new("definitely/not/here/main.vs"));
        assert!(source.is_empty());
    }

    #[test]
    fn test_missing_file_fails_compile() {
        let err = compile_stage(Path::new("definitely/not/here"), ShaderStage::Vertex).unwrap_err();
        match err {
            ShaderError::Compile { stage, path, log } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(path.ends_with("main.vs"));
                assert!(!log.is_empty());
            }
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_carries_diagnostic() {
        let err = compile_source(
            ShaderStage::Fragment,
            Path::new("main.fs"),
            "fn fs_main( -> {".to_string(),
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("fragment"));
        assert!(msg.contains("main.fs"));
    }

    #[test]
    fn test_link_checks_entry_points() {
        let vs = compile_source(ShaderStage::Vertex, Path::new("main.vs"), VS.to_string()).unwrap();
        let fs = compile_source(ShaderStage::Fragment, Path::new("main.fs"), FS.to_string()).unwrap();
        assert!(link(vs.clone(), fs).is_ok());

        // Vertex source handed in as the fragment stage
        let wrong = compile_source(ShaderStage::Fragment, Path::new("main.fs"), VS.to_string()).unwrap();
        match link(vs, wrong) {
            Err(ShaderError::Link { log }) => assert!(log.contains("fs_main")),
            other => panic!("expected link error, got {other:?}"),
        }
    }

    #[test]
    fn test_shipped_shaders_load() {
        let program = load_program(&shipped_shader_dir()).unwrap();
        assert_eq!(program.vertex.stage, ShaderStage::Vertex);
        assert_eq!(program.fragment.stage, ShaderStage::Fragment);
    }
}
