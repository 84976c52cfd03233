// Test module for lexer
//
// Tests are organized by category: tokens, numbers, the keypad
// normalization pass and the hexadecimal token set.

mod token_tests;
