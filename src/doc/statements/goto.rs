/*!
# `goto <label>`

## Purpose
Continue at the line with the given label instead of the next line.

## Remarks
If no line declares `<label>` a `label 'x' is not defined` error will
occur. A reserved word can not be a label.

## Example
```text
paint: write black right goto paint
```

*/
