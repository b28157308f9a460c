//! Native KaHyPar engine (feature `kahypar-support`).
//!
//! Links against `libkahypar` (located by `build.rs`) and drives it through
//! its C interface. The native context is created on construction, configured
//! from the [`PartitionContext`] before every call, and freed on drop.

use std::ffi::{CString, c_char, c_double, c_int, c_uint, c_void};
use std::path::Path;
use std::ptr::{self, NonNull};

use crate::partitioning::context::PartitionContext;
use crate::partitioning::engine::{EngineInput, EngineOutput, PartitionEngine};
use crate::partitioning::error::PartitionError;

type KahyparContext = c_void;
type HypernodeId = c_uint;
type HyperedgeId = c_uint;
type HypernodeWeight = c_int;
type HyperedgeWeight = c_int;
type PartitionId = c_int;

#[link(name = "kahypar")]
unsafe extern "C" {
    fn kahypar_context_new() -> *mut KahyparContext;
    fn kahypar_context_free(context: *mut KahyparContext);
    fn kahypar_configure_context_from_file(context: *mut KahyparContext, ini_file: *const c_char);
    fn kahypar_set_custom_target_block_weights(
        num_blocks: PartitionId,
        block_weights: *const HypernodeWeight,
        context: *mut KahyparContext,
    );
    fn kahypar_partition(
        num_vertices: HypernodeId,
        num_hyperedges: HyperedgeId,
        epsilon: c_double,
        num_blocks: PartitionId,
        vertex_weights: *const HypernodeWeight,
        hyperedge_weights: *const HyperedgeWeight,
        hyperedge_indices: *const usize,
        hyperedges: *const HyperedgeId,
        objective: *mut HyperedgeWeight,
        context: *mut KahyparContext,
        partition: *mut PartitionId,
    );
    fn kahypar_improve_partition(
        num_vertices: HypernodeId,
        num_hyperedges: HyperedgeId,
        epsilon: c_double,
        num_blocks: PartitionId,
        vertex_weights: *const HypernodeWeight,
        hyperedge_weights: *const HyperedgeWeight,
        hyperedge_indices: *const usize,
        hyperedges: *const HyperedgeId,
        input_partition: *const PartitionId,
        num_improvement_iterations: usize,
        objective: *mut HyperedgeWeight,
        context: *mut KahyparContext,
        improved_partition: *mut PartitionId,
    );
}

/// Scalars converted to the native integer types.
struct NativeDims {
    vertices: HypernodeId,
    hyperedges: HyperedgeId,
    blocks: PartitionId,
}

impl NativeDims {
    fn new(ctx: &PartitionContext, input: &EngineInput<'_>) -> Result<Self, PartitionError> {
        let convert = |value: usize, what: &str| {
            c_int::try_from(value)
                .map_err(|_| PartitionError::Engine(format!("{what} {value} exceeds KaHyPar limits")))
        };
        Ok(Self {
            vertices: convert(input.vertex_count, "vertex count")? as HypernodeId,
            hyperedges: convert(input.hyperedge_count, "hyperedge count")? as HyperedgeId,
            blocks: convert(ctx.blocks, "block count")?,
        })
    }
}

fn weights_ptr(weights: Option<&[i32]>) -> *const c_int {
    weights.map_or(ptr::null(), <[i32]>::as_ptr)
}

/// Owner of a native `kahypar_context_t`.
#[derive(Debug)]
pub struct KahyparEngine {
    context: NonNull<KahyparContext>,
}

impl KahyparEngine {
    pub fn new() -> Result<Self, PartitionError> {
        // SAFETY: no preconditions; a null return is handled below.
        let raw = unsafe { kahypar_context_new() };
        let context = NonNull::new(raw)
            .ok_or_else(|| PartitionError::Engine("kahypar_context_new returned null".into()))?;
        Ok(Self { context })
    }

    /// Load the `.ini` preset and the custom block weights of `ctx`.
    fn configure(&mut self, ctx: &PartitionContext) -> Result<(), PartitionError> {
        if let Some(path) = ctx.config_file.as_deref() {
            let ini = ini_path(path)?;
            // SAFETY: the context is live and `ini` is NUL-terminated.
            unsafe { kahypar_configure_context_from_file(self.context.as_ptr(), ini.as_ptr()) };
        }
        if let Some(weights) = ctx.block_weights.as_deref() {
            let blocks = c_int::try_from(weights.len())
                .map_err(|_| PartitionError::Engine("too many block weights".into()))?;
            // SAFETY: KaHyPar copies `blocks` weights out of the live slice.
            unsafe {
                kahypar_set_custom_target_block_weights(
                    blocks,
                    weights.as_ptr(),
                    self.context.as_ptr(),
                )
            };
        }
        Ok(())
    }
}

fn ini_path(path: &Path) -> Result<CString, PartitionError> {
    let text = path.to_str().ok_or_else(|| {
        PartitionError::Engine(format!("config path {} is not UTF-8", path.display()))
    })?;
    CString::new(text).map_err(|e| PartitionError::Engine(format!("invalid config path: {e}")))
}

impl Drop for KahyparEngine {
    fn drop(&mut self) {
        // SAFETY: the pointer came from kahypar_context_new and is freed once.
        unsafe { kahypar_context_free(self.context.as_ptr()) };
    }
}

impl PartitionEngine for KahyparEngine {
    fn partition(
        &mut self,
        ctx: &PartitionContext,
        input: &EngineInput<'_>,
    ) -> Result<EngineOutput, PartitionError> {
        self.configure(ctx)?;
        let dims = NativeDims::new(ctx, input)?;
        let mut assignment = vec![-1; input.vertex_count];
        let mut objective: c_int = 0;
        // SAFETY: every array is live for the call and sized as KaHyPar
        // expects: CSR offsets m+1, pins by offsets, output n.
        unsafe {
            kahypar_partition(
                dims.vertices,
                dims.hyperedges,
                ctx.imbalance,
                dims.blocks,
                weights_ptr(input.vertex_weights),
                weights_ptr(input.hyperedge_weights),
                input.hyperedge_indices.as_ptr(),
                input.hyperedge_vertices.as_ptr(),
                &mut objective,
                self.context.as_ptr(),
                assignment.as_mut_ptr(),
            );
        }
        Ok(EngineOutput {
            assignment,
            objective,
        })
    }

    fn improve(
        &mut self,
        ctx: &PartitionContext,
        input: &EngineInput<'_>,
        initial: &[i32],
        iterations: usize,
    ) -> Result<EngineOutput, PartitionError> {
        if initial.len() != input.vertex_count {
            return Err(PartitionError::AssignmentLength {
                expected: input.vertex_count,
                found: initial.len(),
            });
        }
        self.configure(ctx)?;
        let dims = NativeDims::new(ctx, input)?;
        let mut assignment = vec![-1; input.vertex_count];
        let mut objective: c_int = 0;
        // SAFETY: as in `partition`; `initial` holds one block per vertex.
        unsafe {
            kahypar_improve_partition(
                dims.vertices,
                dims.hyperedges,
                ctx.imbalance,
                dims.blocks,
                weights_ptr(input.vertex_weights),
                weights_ptr(input.hyperedge_weights),
                input.hyperedge_indices.as_ptr(),
                input.hyperedge_vertices.as_ptr(),
                initial.as_ptr(),
                iterations,
                &mut objective,
                self.context.as_ptr(),
                assignment.as_mut_ptr(),
            );
        }
        Ok(EngineOutput {
            assignment,
            objective,
        })
    }
}
