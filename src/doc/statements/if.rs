/*!
# `if <condition> <action> [else <action>]`

## Purpose
Choose an action by the pixel under the cursor.

## Remarks
`<condition>` is `white` or `color` in the palette dialect, where `color`
means any pixel that is not white. The binary dialect uses `white` and
`black`. The first action runs when the pixel matches. Without `else`,
a pixel that does not match falls through to the next line.

Each action must do something: `if white else left` is an error.

## Example
```text
if color write white down else write black up
```

*/
