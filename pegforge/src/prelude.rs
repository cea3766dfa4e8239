pub use crate::data_structs::typedef::{
    LenType,
    RankType,
    ScoreType,
};
pub use crate::data_structs::{
    CombinationCounts,
    CombinationEntry,
    CombinationKey,
    Enzyme,
    LinkerStatus,
    Orientation,
    PegRecord,
    PegRecordBuilder,
};
pub use crate::io::design::{
    DesignReader,
    DesignWriter,
    RowError,
    DESIGN_COL_NAMES,
    DESIGN_FIELD_COUNT,
    LINKER_COL_NAME,
};
pub use crate::pipeline::{
    DesignPipeline,
    PipelineOutput,
    PreparedRun,
    RankReport,
};
pub use crate::tools::filter::FilterCriteria;
pub use crate::tools::linker::{
    LinkerOracle,
    LinkerOrchestrator,
    LinkerRequest,
    PegLitProcess,
    SPCAS9_SCAFFOLD,
};
