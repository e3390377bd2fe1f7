/*!
# `while <condition> <action> [else <action>]`

## Purpose
Keep running an action while the pixel matches.

## Remarks
Same as `if` except the first action comes back to this line rather than
falling through. It may still jump elsewhere with `goto` or `exit`.
Palette dialect only.

## Example
```text
while white write black right
exit 0
```

*/
