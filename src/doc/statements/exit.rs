/*!
# `exit [<status>]`

## Purpose
End the program.

## Remarks
`<status>` is a whole number, 0 when left out. A negative status is an
error. Anything after `exit` that is not a number is not part of it,
so it is reported as being on the wrong line.

## Example
```text
if white exit 1 else exit 0
```

*/
