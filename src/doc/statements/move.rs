/*!
# `up` `down` `left` `right`

## Purpose
Move the cursor one pixel.

## Remarks
Moving off the canvas ends the program with exit status 2. The cursor
does not move and the rest of the action does not happen.

In the binary dialect directions are compass points after `move`:
`move N`, `move E`, `move S`, `move W`, or spelled out as `north`,
`east`, `south` and `west`.

## Example
```text
write black up
```

*/
