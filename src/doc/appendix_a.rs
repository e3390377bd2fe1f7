/*!
# Error Messages

Errors name the line and, where it helps, the word they were found at.
Both count from 1, and the colon after a label is a word.

## Syntax errors

| Message | Cause |
|---------|-------|
| `found empty line, use shift enter if an empty line was intended` | Binary dialect line with no instruction. |
| `label is missing before colon` | Line starts with `:`. |
| `'x' is reserved from use as a label` | Declaring or jumping to a reserved word. |
| `label 'x' is already defined on line n` | Same label declared twice. |
| `instruction is missing after label, use shift enter if a line break was intended` | Binary dialect label with nothing after it. |
| `condition is missing` | `if` or `while` at the end of the line. `color is missing` in the binary dialect. |
| `'x' is not a valid condition` | Not `white`, `color`, `0` or `1`. |
| `'if' action is missing` | Nothing after the condition. |
| `found 'x' before 'if' action` | The consequent is not an action. |
| `'else' action is missing` | Nothing after `else`. |
| `found 'x' before 'else' action` | The alternative is not an action. |
| `color is missing` | `write` at the end of the line. |
| `'x' is not a valid color` | Unknown color after `write`. |
| `direction is missing` | `move` at the end of the line. |
| `'x' is not a valid direction` | Unknown direction after `move`. |
| `label is missing` | `goto` at the end of the line. |
| `'x' is not a valid exit status` | Negative number after `exit`. |
| `'x' should be on the next line` | Words after a complete instruction. |
| `'x' is not a valid instruction` | The line does not start with an instruction. |

## Other errors

| Message | Cause |
|---------|-------|
| `block comment is not terminated` | `/*` without `*/`, reported on the opening line. |
| `label 'x' is not defined` | `goto` a label no line declares. |
| `found infinite loop without moving` | A chain that never moves, when optimizing strictly. |

*/
