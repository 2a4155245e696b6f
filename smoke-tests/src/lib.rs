//! End-to-end smoke tests for the proof systems: circuit to proof to
//! calldata to verification, the way a contract pipeline drives them.

#[cfg(test)]
mod tests;
