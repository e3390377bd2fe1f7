/*!
# Instructions

An action has up to three parts, always in this order. Every part may be
left out; an empty action simply falls through to the next line.

```text
[write <color>] [<direction>] [goto <label> | repeat | exit [<status>]]
```

`if` and `while` choose between two actions by the pixel under the cursor.
*/

#[path = "statements/write.rs"]
#[allow(non_snake_case)]
pub mod WRITE;

#[path = "statements/move.rs"]
#[allow(non_snake_case)]
pub mod MOVE;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/repeat.rs"]
#[allow(non_snake_case)]
pub mod REPEAT;

#[path = "statements/exit.rs"]
#[allow(non_snake_case)]
pub mod EXIT;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;
