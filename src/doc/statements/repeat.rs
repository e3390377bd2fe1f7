/*!
# `repeat`

## Purpose
Run the same line again.

## Remarks
Short for `goto` with the label of the current line, without needing a
label.

## Example
```text
if white right repeat
```

*/
