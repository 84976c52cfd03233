// Test module for the calcdeck binary
//
// Covers the pieces around the engine: history stores, configuration,
// argument parsing and the REPL session.
