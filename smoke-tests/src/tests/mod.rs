mod smoke_groth16;
mod smoke_groth16_artifacts;
mod smoke_plonk;
mod smoke_rejection;
