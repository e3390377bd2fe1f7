/*!
# `write <color>`

## Purpose
Paint the pixel under the cursor.

## Remarks
Comes first in an action. The palette dialect knows `white` `black` `red`
`green` `blue` `cyan` `magenta` `yellow`; the binary dialect only `white`
and `black`. `0` and `1` are white and black in both.

Without `write` the pixel keeps its color.

## Example
```text
write red right
```

*/
